use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, ItemFn, LitStr, Token};

/// Arguments provided to an entry macro.
pub(crate) struct Config {
    pub(crate) input_file: LitStr,
    pub(crate) expect: Option<Expr>,
}

impl Parse for Config {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut input_file = None;
        let mut expect = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            if ident == "input" {
                if input_file.is_some() {
                    return Err(syn::Error::new(ident.span(), "duplicate `input` option"));
                }

                input_file = Some(input.parse::<LitStr>()?);
            } else if ident == "expect" {
                if expect.is_some() {
                    return Err(syn::Error::new(ident.span(), "duplicate `expect` option"));
                }

                expect = Some(input.parse::<Expr>()?);
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown option `{ident}`"),
                ));
            }

            if input.is_empty() {
                break;
            }

            input.parse::<Token![,]>()?;
        }

        let Some(input_file) = input_file else {
            return Err(syn::Error::new(
                Span::call_site(),
                "missing `input` argument",
            ));
        };

        Ok(Self { input_file, expect })
    }
}

/// Validate the annotated item.
pub(crate) fn validate(item: &ItemFn) -> syn::Result<()> {
    if item.sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &item.sig.inputs,
            "expected a single input argument",
        ));
    }

    if let Some(asyncness) = &item.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "entry functions cannot be async",
        ));
    }

    Ok(())
}
