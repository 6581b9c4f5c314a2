use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, GenericArgument, Ident, ImplItem, ImplItemFn, ItemImpl, PathArguments, ReturnType, Type,
};

/// Event kinds a listener method can bind to. A method binds when its first
/// parameter is `&<Kind>Event`.
const EVENT_KINDS: &[&str] = &[
    "PlayerJoin",
    "PlayerQuit",
    "PlayerMove",
    "Chat",
    "Command",
    "BlockBreak",
    "BlockPlace",
    "WorldClose",
];

struct Binding {
    method: Ident,
    event: Ident,
    wants_ctx: bool,
    is_async: bool,
}

pub(crate) fn generate_listener_impl(impl_block: &ItemImpl) -> TokenStream {
    if impl_block.trait_.is_some() {
        return syn::Error::new_spanned(
            impl_block,
            "#[listener] must be on an inherent impl, not a trait impl",
        )
        .to_compile_error();
    }

    let bindings: Vec<Binding> = impl_block
        .items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) => binding_for(method),
            _ => None,
        })
        .collect();

    let registrations = bindings.iter().enumerate().map(|(index, binding)| {
        let this = format_ident!("__listener_{}", index);
        let method = &binding.method;
        let event = &binding.event;

        let call = match (binding.wants_ctx, binding.is_async) {
            (true, true) => quote! {{
                let payload = ctx.data.clone();
                #this.#method(&payload, ctx).await
            }},
            (true, false) => quote! {{
                let payload = ctx.data.clone();
                #this.#method(&payload, ctx)
            }},
            (false, true) => quote! { #this.#method(&ctx.data).await },
            (false, false) => quote! { #this.#method(&ctx.data) },
        };

        quote! {
            let #this = ::std::sync::Arc::clone(&self);
            registry.on::<::df_plugin_runtime::types::#event, _>(move |ctx| {
                let #this = ::std::sync::Arc::clone(&#this);
                ::std::boxed::Box::pin(async move {
                    ::df_plugin_runtime::IntoHandlerResult::into_handler_result(#call)
                })
            });
        }
    });

    let self_ty = &impl_block.self_ty;
    let (impl_generics, _, where_clause) = impl_block.generics.split_for_impl();

    quote! {
        #impl_block

        impl #impl_generics ::df_plugin_runtime::Listener for #self_ty #where_clause {
            #[allow(unused_variables)]
            fn bind(
                self: ::std::sync::Arc<Self>,
                registry: &mut ::df_plugin_runtime::HandlerRegistry,
            ) {
                #( #registrations )*
            }
        }
    }
}

/// `Some` when `method` looks like `fn(&self, &XxxEvent[, &mut EventContext<XxxEvent>])`
/// returning `()` or a `Result`.
fn binding_for(method: &ImplItemFn) -> Option<Binding> {
    let receiver = method.sig.receiver()?;
    if receiver.reference.is_none() || receiver.mutability.is_some() {
        return None;
    }
    if !returns_handler_result(&method.sig.output) {
        return None;
    }

    let mut params = method.sig.inputs.iter().skip(1);
    let event = match params.next()? {
        FnArg::Typed(arg) => event_ident(&arg.ty)?,
        FnArg::Receiver(_) => return None,
    };

    let wants_ctx = match params.next() {
        None => false,
        Some(FnArg::Typed(arg)) if is_context_of(&arg.ty, &event) => true,
        Some(_) => return None,
    };
    if params.next().is_some() {
        return None;
    }

    Some(Binding {
        method: method.sig.ident.clone(),
        event,
        wants_ctx,
        is_async: method.sig.asyncness.is_some(),
    })
}

fn event_ident(ty: &Type) -> Option<Ident> {
    let Type::Reference(reference) = ty else {
        return None;
    };
    if reference.mutability.is_some() {
        return None;
    }
    let Type::Path(path) = &*reference.elem else {
        return None;
    };
    let ident = &path.path.segments.last()?.ident;
    let kind = ident.to_string();
    let kind = kind.strip_suffix("Event")?;
    EVENT_KINDS.contains(&kind).then(|| ident.clone())
}

/// `&mut EventContext<event>`, matched on the last path segments.
fn is_context_of(ty: &Type, event: &Ident) -> bool {
    let Type::Reference(reference) = ty else {
        return false;
    };
    if reference.mutability.is_none() {
        return false;
    }
    let Type::Path(path) = &*reference.elem else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "EventContext" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    let mut args = args.args.iter();
    match (args.next(), args.next()) {
        (Some(GenericArgument::Type(Type::Path(inner))), None) => inner
            .path
            .segments
            .last()
            .is_some_and(|last| last.ident == *event),
        _ => false,
    }
}

/// Accepts no return type, `()`, or anything named `Result`.
fn returns_handler_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Tuple(tuple) => tuple.elems.is_empty(),
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|last| last.ident == "Result"),
            _ => false,
        },
    }
}
