use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have at least one field, one for each channel of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let channel_count = field_names.len();

    // Make sure the channel fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Add some derives.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let model_name = struct_name.to_string().to_case(Case::Flat);

    let new_doc = format!("Create a new {} color from its channels.", model_name);
    let to_channels_doc = format!(
        "Return the {} channels in their canonical order.",
        model_name
    );

    let indices = (0..channel_count)
        .map(syn::Index::from)
        .collect::<Vec<_>>();

    let model_impl = quote! {
        impl #struct_name {
            #[doc = #new_doc]
            pub fn new(#(#field_names: crate::Component,)*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            #[doc = #to_channels_doc]
            pub fn to_channels(&self) -> [crate::Component; #channel_count] {
                [#(self.#field_names,)*]
            }
        }

        impl From<[crate::Component; #channel_count]> for #struct_name {
            fn from(value: [crate::Component; #channel_count]) -> Self {
                Self::new(#(value[#indices],)*)
            }
        }

        impl From<#struct_name> for crate::Value {
            fn from(value: #struct_name) -> Self {
                crate::Value::Channels(value.to_channels().to_vec())
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
