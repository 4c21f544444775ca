use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

const CONTEXT_FIELD: &str = "context";
const SOURCE_FIELD: &str = "source";
const INTERNAL_VARIANT: &str = "Internal";

/// What the expansion needs to know about one enum variant.
struct VariantInfo<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "registrar_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<syn::Result<Vec<_>>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(&input);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<VariantInfo<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "registrar_error requires named fields (use `{ message, context }` style variants)",
        ));
    };

    let context = fields.named.iter().find(|f| is_named(f, CONTEXT_FIELD));
    if let Some(field) = context
        && !is_context_type(&field.ty)
    {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "context field must be Option<Cow<'static, str>>",
        ));
    }

    let source = fields
        .named
        .iter()
        .find(|f| is_named(f, SOURCE_FIELD) || has_attr(f, "source") || has_attr(f, "from"))
        .and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));

    if source.is_some() && context.is_none() {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "registrar_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(VariantInfo {
        ident: &variant.ident,
        source,
        has_context: context.is_some(),
        cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
    })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_traits(input);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }
    if derives.is_empty() {
        return quote! {};
    }
    quote! { #[derive(#(#derives),*)] }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg = &v.cfg;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #arms )*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, v: &VariantInfo<'_>) -> Option<TokenStream> {
    if v.ident == INTERNAL_VARIANT {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg = &v.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == INTERNAL_VARIANT) else {
        return quote! {};
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn is_named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == name)
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_traits(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                traits.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}

/// Accepts `Option<Cow<'static, str>>` with any path prefix on `Cow`.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = rendered.strip_prefix("Option<").and_then(|s| s.strip_suffix('>')) else {
        return false;
    };
    let Some(idx) = inner.find("Cow<") else {
        return false;
    };
    let (path, cow) = inner.split_at(idx);
    (path.is_empty() || path.ends_with("::")) && cow == "Cow<'static,str>"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(src: &str) -> String {
        let input: DeriveInput = syn::parse_str(src).expect("test input should parse");
        expand(input).to_string()
    }

    #[test]
    fn generates_ext_trait_and_conversions() {
        let out = expand_str(
            r#"
            pub enum DemoError {
                #[error("io{}: {source}", format_context(.context))]
                Io { source: std::io::Error, context: Option<Cow<'static, str>> },
                #[error("internal{}: {message}", format_context(.context))]
                Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
            "#,
        );
        assert!(out.contains("pub trait DemoErrorExt"));
        assert!(out.contains("impl From < std :: io :: Error > for DemoError"));
        assert!(out.contains("impl From < & 'static str > for DemoError"));
        assert!(out.contains(":: thiserror :: Error"));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn plain_field_variants_need_no_source() {
        let out = expand_str(
            r#"
            pub enum DemoError {
                #[error("course {code} is full")]
                Full { code: String, capacity: usize, context: Option<std::borrow::Cow<'static, str>> },
            }
            "#,
        );
        assert!(!out.contains("compile_error"));
        assert!(!out.contains("impl From <"), "no source field means no From impl");
    }

    #[test]
    fn rejects_source_without_context() {
        let out = expand_str(
            r#"
            pub enum DemoError {
                #[error("io: {source}")]
                Io { #[source] source: std::io::Error },
            }
            "#,
        );
        assert!(out.contains("compile_error"));
        assert!(out.contains("requires `context"));
    }

    #[test]
    fn rejects_tuple_variants() {
        let out = expand_str(
            r#"
            pub enum DemoError {
                #[error("io: {0}")]
                Io(std::io::Error),
            }
            "#,
        );
        assert!(out.contains("compile_error"));
        assert!(out.contains("named fields"));
    }

    #[test]
    fn rejects_wrong_context_type() {
        let out = expand_str(
            r#"
            pub enum DemoError {
                #[error("oops")]
                Oops { message: String, context: Option<String> },
            }
            "#,
        );
        assert!(out.contains("context field must be"));
    }

    #[test]
    fn rejects_structs() {
        let out = expand_str("pub struct NotAnEnum { context: Option<Cow<'static, str>> }");
        assert!(out.contains("can only be applied to enums"));
    }

    #[test]
    fn keeps_existing_derives() {
        let out = expand_str(
            r#"
            #[derive(Debug)]
            pub enum DemoError {
                #[error("oops")]
                Oops { context: Option<Cow<'static, str>> },
            }
            "#,
        );
        assert!(!out.contains("derive (Debug ,"));
        assert!(out.contains(":: thiserror :: Error"));
    }

    #[test]
    fn context_type_accepts_qualified_cow() {
        let ty: Type = syn::parse_str("Option<std::borrow::Cow<'static, str>>").unwrap();
        assert!(is_context_type(&ty));
        let ty: Type = syn::parse_str("Option<Cow<'a, str>>").unwrap();
        assert!(!is_context_type(&ty));
    }
}
