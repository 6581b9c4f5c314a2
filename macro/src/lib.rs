mod listener;
mod plugin;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, ItemImpl};

use crate::{listener::generate_listener_impl, plugin::generate_plugin_impl};

/// Implements `df_plugin_runtime::Plugin` from a `#[plugin(...)]` attribute.
///
/// ```ignore
/// #[derive(Plugin)]
/// #[plugin(id = "area", name = "Area", version = "1.0.0", api = "v1")]
/// struct AreaPlugin;
/// ```
///
/// Add the bare `hooks` flag to forward `on_enable`/`on_disable` to
/// inherent methods of the same names; both must then exist.
#[proc_macro_derive(Plugin, attributes(plugin))]
pub fn plugin_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let derive_name = &ast.ident;

    let info_attr = match find_attribute(
        &ast,
        "plugin",
        "Missing `#[plugin(...)]` attribute with metadata.",
    ) {
        Ok(attr) => attr,
        Err(e) => return e.to_compile_error().into(),
    };

    let plugin_impl = generate_plugin_impl(info_attr, derive_name);

    quote! {
        #plugin_impl
    }
    .into()
}

fn find_attribute<'a>(
    ast: &'a syn::DeriveInput,
    name: &str,
    error: &str,
) -> Result<&'a Attribute, syn::Error> {
    ast.attrs
        .iter()
        .find(|a| a.path().is_ident(name))
        .ok_or_else(|| syn::Error::new(ast.ident.span(), error))
}

/// Binds the event methods of an inherent impl as handlers.
///
/// Every `&self` method whose first parameter is `&XxxEvent` for a known
/// event kind is registered under that kind, in source order. An optional
/// second `&mut EventContext<XxxEvent>` parameter gives access to cancel and
/// mutate. Methods may be `async` and may return `()` or `Result<(), E>`.
/// Everything else in the block is left alone.
#[proc_macro_attribute]
pub fn listener(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item_clone = item.clone();

    let impl_block = match syn::parse::<ItemImpl>(item) {
        Ok(block) => block,
        // Keep the LSP alive while the user is mid-edit.
        Err(_) => return item_clone,
    };

    generate_listener_impl(&impl_block).into()
}
