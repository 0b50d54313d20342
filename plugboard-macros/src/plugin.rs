//! `#[plugin]` attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, ReturnType, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[plugin]` macro.
pub(crate) struct PluginArgs {
    /// Optional explicit registration name.
    pub name: Option<LitStr>,
}

impl Parse for PluginArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "plugin name must not be empty"));
                    }
                    name = Some(lit);
                }
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

        Ok(PluginArgs { name })
    }
}

fn validate(input: &ItemFn) -> syn::Result<()> {
    let sig = &input.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "plugin handler must not be async",
        ));
    }

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "plugin handler must not be generic",
        ));
    }

    if sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "plugin handler must take exactly one argument: fn(input: &str) -> String",
        ));
    }

    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "plugin handler cannot have self parameter",
        ));
    }

    if let ReturnType::Default = sig.output {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            "plugin handler must return String",
        ));
    }

    Ok(())
}

pub fn plugin_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as PluginArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Err(err) = validate(&input) {
        return err.to_compile_error().into();
    }

    let fn_name = &input.sig.ident;
    let name = match args.name {
        Some(lit) => lit,
        None => LitStr::new(&fn_name.to_string(), fn_name.span()),
    };

    // The function item coerces to `fn(&str) -> String` here, so a
    // mismatched signature is reported at the submission site.
    let expanded = quote! {
        #input

        ::plugboard::inventory::submit! {
            ::plugboard::collected::PluginRegistration::new(#name, #fn_name)
        }
    };

    TokenStream::from(expanded)
}
