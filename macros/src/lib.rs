use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, GenericArgument, ItemFn, PathArguments, ReturnType,
    Signature, Type,
};

/// Turns function returning `Result<T, E>` into one returning
/// `outcome::Outcome<T, E>`.
///
/// Body keeps working against `Result<T, E>`, so `?` and early `return`
/// behave as before. Works for both `fn` and `async fn`. One argument
/// `anyhow::Result<T>` is accepted as well and settles into
/// `Outcome<T, anyhow::Error>`.
#[proc_macro_attribute]
pub fn settled(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "#[settled] does not take arguments")
            .to_compile_error()
            .into();
    }

    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(item as ItemFn);

    match expand(input) {
        Ok(expanded) => proc_macro::TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(mut input: ItemFn) -> syn::Result<TokenStream> {
    let result_ty = declared_result(&input.sig)?;
    let (success, failure) = split_result(&result_ty)?;
    let body = &input.block;

    // Result type annotations let `?` inside the body infer its error type.
    let settled_body = if input.sig.asyncness.is_some() {
        quote! {{
            let __settled: #result_ty = async move {
                let __result: #result_ty = #body;
                __result
            }
            .await;
            ::outcome::Outcome::from(__settled)
        }}
    } else {
        quote! {{
            let __settled: #result_ty = (move || #body)();
            ::outcome::Outcome::from(__settled)
        }}
    };

    input.sig.output = parse_quote!(-> ::outcome::Outcome<#success, #failure>);
    input.block = Box::new(syn::parse2(settled_body)?);

    Ok(quote!(#input))
}

fn declared_result(sig: &Signature) -> syn::Result<Type> {
    match &sig.output {
        ReturnType::Type(_, ty) => Ok((**ty).clone()),
        ReturnType::Default => Err(syn::Error::new(
            sig.ident.span(),
            "#[settled] function has to return `Result<T, E>`",
        )),
    }
}

// Splits `Result<T, E>` (or `anyhow::Result<T>`) into T and E.
fn split_result(ty: &Type) -> syn::Result<(Type, Type)> {
    let not_result = || syn::Error::new(ty.span(), "expected `Result<T, E>` return type");

    let path = match ty {
        Type::Path(type_path) if type_path.qself.is_none() => &type_path.path,
        _ => return Err(not_result()),
    };
    let last = path.segments.last().ok_or_else(not_result)?;
    if last.ident != "Result" {
        return Err(not_result());
    }

    let args: Vec<Type> = match &last.arguments {
        PathArguments::AngleBracketed(generic) => generic
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(t) => Some(t.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    match args.as_slice() {
        [success, failure] => Ok((success.clone(), failure.clone())),
        [success] if path.segments.iter().any(|s| s.ident == "anyhow") => {
            Ok((success.clone(), parse_quote!(::anyhow::Error)))
        }
        _ => Err(syn::Error::new(
            ty.span(),
            "cannot tell success and failure types apart, spell out `Result<T, E>`",
        )),
    }
}
