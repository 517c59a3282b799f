//! Attribute macros for Keiro.
//!
//! - `#[receiver]` - Register a listener type with the link-time registry

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod receiver;

use receiver::ReceiverArgs;

/// Registers a listener type so that `EventHub::static_init` picks it up.
///
/// The type must implement `Listener` and `Default`; one instance is built
/// through `Default` when the hub initializes. The registering crate's name
/// is recorded as the record's module.
///
/// # Arguments
///
/// - `group = "..."` (required): the group to listen on
/// - `priority = <expr>`: lower runs first, defaults to `keiro::priority::MEDIUM`
/// - `flag = <expr>`: `u32` flag bits, defaults to `0` (match all)
/// - `name = "..."`: identity name, defaults to the type's module path
///
/// # Example
///
/// ```rust,ignore
/// #[keiro::receiver(group = "login", priority = keiro::priority::HIGH, flag = 0b10)]
/// #[derive(Default)]
/// struct RefreshProfile;
///
/// impl keiro::Listener for RefreshProfile {}
/// ```
#[proc_macro_attribute]
pub fn receiver(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ReceiverArgs);
    let input = parse_macro_input!(item as DeriveInput);

    receiver::expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
