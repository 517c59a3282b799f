//! The `#[receiver]` attribute.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    DeriveInput, Expr, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
};

/// Arguments for the `#[receiver]` macro.
pub(crate) struct ReceiverArgs {
    pub group: LitStr,
    pub priority: Option<Expr>,
    pub flag: Option<Expr>,
    pub name: Option<LitStr>,
}

impl Parse for ReceiverArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut group = None;
        let mut priority = None;
        let mut flag = None;
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "group" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "group must not be empty"));
                    }
                    group = Some(lit);
                }
                "priority" => priority = Some(input.parse()?),
                "flag" => flag = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let group = group.ok_or_else(|| input.error("missing `group = \"...\"`"))?;

        Ok(ReceiverArgs {
            group,
            priority,
            flag,
            name,
        })
    }
}

/// Emit the listener type, its constructor and the `inventory` submission.
pub(crate) fn expand(args: ReceiverArgs, input: DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "receiver types cannot be generic: one concrete instance is constructed per registration",
        ));
    }

    let ty = &input.ident;
    let group = &args.group;
    let construct = format_ident!("__keiro_construct_{}", ty);

    let name = match args.name {
        Some(ref name) => quote! { #name },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ty)) },
    };
    let priority = args.priority.as_ref().map(|p| quote! { .with_priority(#p) });
    let flag = args.flag.as_ref().map(|f| quote! { .with_flag(#f) });

    Ok(quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #construct() -> ::core::result::Result<::keiro::BoxListener, ::keiro::BoxError> {
            ::core::result::Result::Ok(::std::boxed::Box::new(
                <#ty as ::core::default::Default>::default(),
            ))
        }

        ::keiro::inventory::submit! {
            ::keiro::Receiver::new(#group, #name, #construct)
                #priority
                #flag
                .with_module(::core::env!("CARGO_PKG_NAME"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{ReceiverArgs, expand};
    use syn::DeriveInput;

    fn parse_err(attr: &str) -> String {
        match syn::parse_str::<ReceiverArgs>(attr) {
            Ok(_) => panic!("`{attr}` should be rejected"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn parses_every_key() {
        let args: ReceiverArgs = syn::parse_str(
            r#"group = "login", priority = keiro::priority::HIGH, flag = 0b10, name = "guard""#,
        )
        .unwrap();

        assert_eq!(args.group.value(), "login");
        assert!(args.priority.is_some());
        assert!(args.flag.is_some());
        assert_eq!(args.name.map(|n| n.value()).as_deref(), Some("guard"));
    }

    #[test]
    fn rejects_empty_group() {
        assert_eq!(parse_err(r#"group = """#), "group must not be empty");
    }

    #[test]
    fn rejects_missing_group() {
        assert!(parse_err("priority = 1").ends_with("missing `group = \"...\"`"));
        assert!(parse_err("").ends_with("missing `group = \"...\"`"));
    }

    #[test]
    fn rejects_unknown_key() {
        assert_eq!(
            parse_err(r#"group = "login", colour = 3"#),
            "unknown attribute: colour"
        );
    }

    #[test]
    fn rejects_generic_types() {
        let args: ReceiverArgs = syn::parse_str(r#"group = "login""#).unwrap();
        let input: DeriveInput = syn::parse_str("struct Wrapper<T>(T);").unwrap();

        let err = expand(args, input).unwrap_err();
        assert!(err.to_string().starts_with("receiver types cannot be generic"));
    }

    #[test]
    fn expansion_submits_a_receiver() {
        let args: ReceiverArgs = syn::parse_str(r#"group = "login", flag = 4"#).unwrap();
        let input: DeriveInput = syn::parse_str("#[derive(Default)] struct Audit;").unwrap();

        let tokens = expand(args, input).unwrap().to_string();

        assert!(tokens.contains("fn __keiro_construct_Audit"));
        assert!(tokens.contains("submit"));
        assert!(tokens.contains("with_flag"));
        assert!(!tokens.contains("with_priority"));
        assert!(tokens.contains("CARGO_PKG_NAME"));
    }
}
