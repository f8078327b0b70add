use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics, Ident, Member};

pub fn derive_inspect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match InspectDescription::parse(&input) {
        Ok(description) => description.expand().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Everything the derive needs to know about the input type.
struct InspectDescription {
    name: Ident,
    generics: Generics,
    shape: Shape,
}

enum Shape {
    Struct(Vec<FieldDescription>),
    Enum(Vec<VariantDescription>),
}

struct VariantDescription {
    ident: Ident,
    style: VariantStyle,
    fields: Vec<FieldDescription>,
}

#[derive(Clone, Copy)]
enum VariantStyle {
    Named,
    Unnamed,
    Unit,
}

struct FieldDescription {
    member: Member,
    /// Path segment reported for this field
    segment: String,
    skip: bool,
}

impl InspectDescription {
    fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let shape = match &input.data {
            Data::Struct(data) => Shape::Struct(parse_fields(&data.fields, None)?),
            Data::Enum(data) => Shape::Enum(
                data.variants
                    .iter()
                    .map(|variant| {
                        let style = match &variant.fields {
                            Fields::Named(_) => VariantStyle::Named,
                            Fields::Unnamed(_) => VariantStyle::Unnamed,
                            Fields::Unit => VariantStyle::Unit,
                        };
                        Ok(VariantDescription {
                            ident: variant.ident.clone(),
                            style,
                            fields: parse_fields(&variant.fields, Some(&variant.ident))?,
                        })
                    })
                    .collect::<syn::Result<_>>()?,
            ),
            Data::Union(data) => return Err(syn::Error::new_spanned(data.union_token, "Inspect cannot be derived for unions")),
        };

        let mut generics = input.generics.clone();
        for param in generics.params.iter_mut() {
            if let GenericParam::Type(type_param) = param {
                type_param.bounds.push(parse_quote!(::nilcheck::Inspect));
            }
        }

        Ok(Self { name: input.ident.clone(), generics, shape })
    }

    fn expand(&self) -> TokenStream2 {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let children = match &self.shape {
            Shape::Struct(fields) => {
                let entries = fields.iter().filter(|f| !f.skip).map(|f| {
                    let member = &f.member;
                    let segment = &f.segment;
                    quote! { ::nilcheck::Child::Field(#segment, &self.#member) }
                });
                children_of(entries.collect())
            }
            Shape::Enum(variants) if variants.is_empty() => quote! { match *self {} },
            Shape::Enum(variants) => {
                let arms = variants.iter().map(|variant| variant.match_arm());
                quote! {
                    match self {
                        #(#arms)*
                    }
                }
            }
        };

        quote! {
            impl #impl_generics ::nilcheck::Inspect for #name #ty_generics #where_clause {
                fn kind(&self) -> ::nilcheck::Kind { ::nilcheck::Kind::Struct }

                fn children(&self) -> ::nilcheck::Children<'_> {
                    #children
                }
            }
        }
    }
}

impl VariantDescription {
    fn match_arm(&self) -> TokenStream2 {
        let ident = &self.ident;
        let bindings: Vec<Ident> = self.fields.iter().enumerate().map(|(index, _)| format_ident!("__nilcheck_field_{}", index)).collect();
        let entries = self.fields.iter().zip(&bindings).filter(|(f, _)| !f.skip).map(|(f, binding)| {
            let segment = &f.segment;
            quote! { ::nilcheck::Child::Field(#segment, #binding) }
        });
        let children = children_of(entries.collect());

        let pattern = match self.style {
            VariantStyle::Named => {
                let members = self.fields.iter().map(|f| &f.member);
                quote! { Self::#ident { #(#members: #bindings),* } }
            }
            VariantStyle::Unnamed => quote! { Self::#ident ( #(#bindings),* ) },
            VariantStyle::Unit => quote! { Self::#ident },
        };

        quote! {
            #[allow(unused_variables)]
            #pattern => { #children }
        }
    }
}

fn children_of(entries: Vec<TokenStream2>) -> TokenStream2 {
    if entries.is_empty() {
        quote! { ::std::boxed::Box::new(::std::iter::empty()) }
    } else {
        quote! { ::std::boxed::Box::new([#(#entries),*].into_iter()) }
    }
}

fn parse_fields(fields: &Fields, variant: Option<&Ident>) -> syn::Result<Vec<FieldDescription>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, name) = match &field.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
                None => (Member::Unnamed(index.into()), index.to_string()),
            };
            let segment = match variant {
                Some(variant) => format!("{variant}::{name}"),
                None => name,
            };
            Ok(FieldDescription { member, segment, skip: has_skip_flag(&field.attrs)? })
        })
        .collect()
}

fn has_skip_flag(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("nilcheck")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported nilcheck attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
