use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Expr, Ident, Lit, LitStr, Meta, Token,
};

struct PluginInfoParser {
    pub id: LitStr,
    pub name: LitStr,
    pub version: LitStr,
    pub api: LitStr,
    pub hooks: bool,
}

impl Parse for PluginInfoParser {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        let mut id = None;
        let mut name = None;
        let mut version = None;
        let mut api = None;
        let mut hooks = false;

        for meta in metas {
            match meta {
                Meta::NameValue(nv) => {
                    let key_ident = nv.path.get_ident().ok_or_else(|| {
                        syn::Error::new_spanned(&nv.path, "Expected an identifier (e.g., 'id')")
                    })?;

                    let value_str = match &nv.value {
                        Expr::Lit(expr_lit) => match &expr_lit.lit {
                            Lit::Str(lit_str) => lit_str.clone(),
                            _ => {
                                return Err(syn::Error::new_spanned(
                                    &nv.value,
                                    "Expected a string literal",
                                ));
                            }
                        },
                        _ => {
                            return Err(syn::Error::new_spanned(
                                &nv.value,
                                "Expected a string literal",
                            ));
                        }
                    };

                    if key_ident == "id" {
                        id = Some(value_str);
                    } else if key_ident == "name" {
                        name = Some(value_str);
                    } else if key_ident == "version" {
                        version = Some(value_str);
                    } else if key_ident == "api" {
                        api = Some(value_str);
                    } else {
                        return Err(syn::Error::new_spanned(
                            key_ident,
                            "Unknown key. Expected 'id', 'name', 'version', or 'api'",
                        ));
                    }
                }
                // `hooks` forwards on_enable/on_disable to inherent methods.
                Meta::Path(path) if path.is_ident("hooks") => hooks = true,
                _ => {
                    return Err(syn::Error::new_spanned(
                        meta,
                        "Expected `key = \"value\"` or `hooks`",
                    ));
                }
            };
        }

        // Point at the whole `#[plugin(...)]` attribute if a field is missing.
        let id = id.ok_or_else(|| syn::Error::new(input.span(), "Missing required field 'id'"))?;
        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "Missing required field 'name'"))?;
        let version = version
            .ok_or_else(|| syn::Error::new(input.span(), "Missing required field 'version'"))?;
        let api =
            api.ok_or_else(|| syn::Error::new(input.span(), "Missing required field 'api'"))?;

        Ok(Self {
            id,
            name,
            version,
            api,
            hooks,
        })
    }
}

pub(crate) fn generate_plugin_impl(
    attr: &Attribute,
    derive_name: &Ident,
) -> proc_macro2::TokenStream {
    let plugin_info = match attr.parse_args::<PluginInfoParser>() {
        Ok(info) => info,
        Err(e) => return e.to_compile_error(),
    };

    let id_lit = &plugin_info.id;
    let name_lit = &plugin_info.name;
    let version_lit = &plugin_info.version;
    let api_lit = &plugin_info.api;

    let hooks = if plugin_info.hooks {
        quote! {
            fn on_enable(&self, server: &::df_plugin_runtime::Server) {
                #derive_name::on_enable(self, server)
            }
            fn on_disable(&self, server: &::df_plugin_runtime::Server) {
                #derive_name::on_disable(self, server)
            }
        }
    } else {
        quote! {}
    };

    quote! {
        impl ::df_plugin_runtime::Plugin for #derive_name {
            fn identity(&self) -> ::df_plugin_runtime::PluginIdentity {
                ::df_plugin_runtime::PluginIdentity::new(#id_lit, #name_lit, #version_lit)
                    .with_api_version(#api_lit)
            }

            #hooks
        }
    }
}
