//! Library type tables for `Introspect` impls.
//!
//! Each entry is `(type, generics, shape)`. Generic type parameters gain an
//! `Introspect` bound and become the descriptor's arguments; the path
//! without generic arguments becomes the descriptor's path.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, parse_quote};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypeKind {
    Concrete,
    Generic(&'static str),
}

/// How the type is categorized.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// Structs and data-carrying enums.
    Class,
    /// Fieldless enums.
    Enum,
    Union,
}

use Shape::*;
use TypeKind::*;

/// Always available.
pub const CORE_TYPES: &[(&str, TypeKind, Shape)] = &[
    ("core::option::Option<T>", Generic("T"), Class),
    ("core::result::Result<T, E>", Generic("T, E"), Class),
    ("core::cmp::Ordering", Concrete, Enum),

    // Cell types
    ("core::cell::Cell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::RefCell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::UnsafeCell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::OnceCell<T>", Generic("T"), Class),

    // Memory types
    ("core::mem::ManuallyDrop<T>", Generic("T: ?Sized"), Class),
    ("core::mem::MaybeUninit<T>", Generic("T"), Union),
    ("core::pin::Pin<T>", Generic("T"), Class),
    ("core::marker::PhantomData<T>", Generic("T: ?Sized"), Class),
    ("core::marker::PhantomPinned", Concrete, Class),
    ("core::alloc::Layout", Concrete, Class),
    ("core::any::TypeId", Concrete, Class),

    // Ranges
    ("core::ops::Range<T>", Generic("T"), Class),
    ("core::ops::RangeFrom<T>", Generic("T"), Class),
    ("core::ops::RangeTo<T>", Generic("T"), Class),
    ("core::ops::RangeInclusive<T>", Generic("T"), Class),
    ("core::ops::RangeToInclusive<T>", Generic("T"), Class),
    ("core::ops::RangeFull", Concrete, Class),
    ("core::ops::Bound<T>", Generic("T"), Class),

    ("core::time::Duration", Concrete, Class),
    ("core::num::Wrapping<T>", Generic("T"), Class),
    ("core::num::Saturating<T>", Generic("T"), Class),
    ("core::num::NonZeroU8", Concrete, Class),
    ("core::num::NonZeroU16", Concrete, Class),
    ("core::num::NonZeroU32", Concrete, Class),
    ("core::num::NonZeroU64", Concrete, Class),
    ("core::num::NonZeroU128", Concrete, Class),
    ("core::num::NonZeroUsize", Concrete, Class),
    ("core::num::NonZeroI8", Concrete, Class),
    ("core::num::NonZeroI16", Concrete, Class),
    ("core::num::NonZeroI32", Concrete, Class),
    ("core::num::NonZeroI64", Concrete, Class),
    ("core::num::NonZeroI128", Concrete, Class),
    ("core::num::NonZeroIsize", Concrete, Class),
    ("core::task::Poll<T>", Generic("T"), Class),
    ("core::task::Waker", Concrete, Class),

    // Atomics
    ("core::sync::atomic::AtomicBool", Concrete, Class),
    ("core::sync::atomic::AtomicI8", Concrete, Class),
    ("core::sync::atomic::AtomicI16", Concrete, Class),
    ("core::sync::atomic::AtomicI32", Concrete, Class),
    ("core::sync::atomic::AtomicI64", Concrete, Class),
    ("core::sync::atomic::AtomicIsize", Concrete, Class),
    ("core::sync::atomic::AtomicU8", Concrete, Class),
    ("core::sync::atomic::AtomicU16", Concrete, Class),
    ("core::sync::atomic::AtomicU32", Concrete, Class),
    ("core::sync::atomic::AtomicU64", Concrete, Class),
    ("core::sync::atomic::AtomicUsize", Concrete, Class),
    ("core::sync::atomic::AtomicPtr<T>", Generic("T"), Class),
    ("core::sync::atomic::Ordering", Concrete, Enum),
];

/// Requires the "alloc" feature.
pub const ALLOC_TYPES: &[(&str, TypeKind, Shape)] = &[
    ("alloc::string::String", Concrete, Class),
    ("alloc::ffi::CString", Concrete, Class),

    // Smart pointers
    ("alloc::boxed::Box<T>", Generic("T: ?Sized"), Class),
    ("alloc::rc::Rc<T>", Generic("T: ?Sized"), Class),
    ("alloc::sync::Arc<T>", Generic("T: ?Sized"), Class),
    ("alloc::rc::Weak<T>", Generic("T: ?Sized"), Class),
    ("alloc::sync::Weak<T>", Generic("T: ?Sized"), Class),

    // Collections
    ("alloc::vec::Vec<T>", Generic("T"), Class),
    ("alloc::collections::VecDeque<T>", Generic("T"), Class),
    ("alloc::collections::LinkedList<T>", Generic("T"), Class),
    ("alloc::collections::BinaryHeap<T>", Generic("T"), Class),
    ("alloc::collections::BTreeMap<K, V>", Generic("K, V"), Class),
    ("alloc::collections::BTreeSet<T>", Generic("T"), Class),
];

/// Requires the "std" feature.
pub const STD_TYPES: &[(&str, TypeKind, Shape)] = &[
    ("std::collections::HashMap<K, V>", Generic("K, V"), Class),
    ("std::collections::HashSet<T>", Generic("T"), Class),

    // std::sync
    ("std::sync::Mutex<T>", Generic("T: ?Sized"), Class),
    ("std::sync::RwLock<T>", Generic("T: ?Sized"), Class),
    ("std::sync::OnceLock<T>", Generic("T"), Class),
    ("std::sync::Condvar", Concrete, Class),
    ("std::sync::Barrier", Concrete, Class),
    ("std::sync::Once", Concrete, Class),

    // std::thread
    ("std::thread::Thread", Concrete, Class),
    ("std::thread::JoinHandle<T>", Generic("T"), Class),

    // std::fs / std::path / std::ffi
    ("std::fs::File", Concrete, Class),
    ("std::fs::Metadata", Concrete, Class),
    ("std::path::Path", Concrete, Class),
    ("std::path::PathBuf", Concrete, Class),
    ("std::ffi::OsStr", Concrete, Class),
    ("std::ffi::OsString", Concrete, Class),

    // std::net
    ("std::net::IpAddr", Concrete, Class),
    ("std::net::Ipv4Addr", Concrete, Class),
    ("std::net::Ipv6Addr", Concrete, Class),
    ("std::net::SocketAddr", Concrete, Class),
    ("std::net::TcpStream", Concrete, Class),
    ("std::net::TcpListener", Concrete, Class),
    ("std::net::UdpSocket", Concrete, Class),
    ("std::net::Shutdown", Concrete, Enum),

    // std::process / std::time / std::io
    ("std::process::Command", Concrete, Class),
    ("std::process::Child", Concrete, Class),
    ("std::process::ExitStatus", Concrete, Class),
    ("std::time::Instant", Concrete, Class),
    ("std::time::SystemTime", Concrete, Class),
    ("std::io::Error", Concrete, Class),
    ("std::io::ErrorKind", Concrete, Enum),
];

/// Select a table by name: `core`, `alloc` or `std`.
pub fn table(name: &Ident) -> syn::Result<&'static [(&'static str, TypeKind, Shape)]> {
    match name.to_string().as_str() {
        "core" => Ok(CORE_TYPES),
        "alloc" => Ok(ALLOC_TYPES),
        "std" => Ok(STD_TYPES),
        _ => Err(syn::Error::new_spanned(name, "expected one of `core`, `alloc`, `std`")),
    }
}

fn expand_entry(path: &str, kind: TypeKind, shape: Shape) -> syn::Result<TokenStream> {
    let ty: syn::Type = syn::parse_str(path)?;
    let bare_path = path.split('<').next().unwrap_or(path).trim();

    let mut generics: Generics = match kind {
        Concrete => Generics::default(),
        Generic(params) => syn::parse_str(&format!("<{params}>"))?,
    };
    let mut args = Vec::new();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(tp) = param {
            tp.bounds.push(parse_quote!(crate::Introspect));
            args.push(tp.ident.clone());
        }
    }
    let params = generics.params;

    let (tag, adt_kind) = match shape {
        Class => (quote!(crate::ClassTag), quote!(Class)),
        Enum => (quote!(crate::EnumTag), quote!(Enum)),
        Union => (quote!(crate::UnionTag), quote!(Union)),
    };

    Ok(quote! {
        crate::__impl_introspect! {
            impl [#params] #ty where [] {
                category: #tag,
                desc: &crate::TypeDesc::Adt(crate::AdtDesc {
                    kind: crate::AdtKind::#adt_kind,
                    path: #bare_path,
                    args: &[#(<#args as crate::Introspect>::DESC),*],
                    consts: &[],
                    site: "",
                    bases: &[],
                }),
            }
        }
    })
}

/// Generate `Introspect` impls for one library table.
pub fn expand_library_types(name: Ident) -> TokenStream {
    let entries = match table(&name) {
        Ok(entries) => entries,
        Err(err) => return err.to_compile_error(),
    };
    let mut impls = Vec::new();
    for &(path, kind, shape) in entries {
        match expand_entry(path, kind, shape) {
            Ok(tokens) => impls.push(tokens),
            Err(err) => return err.to_compile_error(),
        }
    }
    quote! { #(#impls)* }
}
