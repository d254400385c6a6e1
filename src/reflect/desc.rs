//! Structural type descriptors.
//!
//! Every introspectable type carries a `&'static TypeDesc` built in a const
//! initializer. Descriptors are compared structurally in `const fn`s, which
//! is how type identity and base-class search are decided at compile time.

use core::fmt;

use crate::primitives::const_utils::{len_eq, str_eq};

/// Which reference form a [`TypeDesc::Reference`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `&T`
    Shared,
    /// `&mut T`
    Mutable,
    /// `RvalueRef<T>`
    Rvalue,
}

/// Which user-defined type kind a [`TypeDesc::Adt`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdtKind {
    Class,
    Union,
    Enum,
}

/// Signature of a function type.
#[derive(Debug, Clone, Copy)]
pub struct FnDesc {
    pub abi: &'static str,
    pub is_unsafe: bool,
    pub variadic: bool,
    pub inputs: &'static [&'static TypeDesc],
    pub output: &'static TypeDesc,
}

/// A class, union or enum.
#[derive(Debug, Clone, Copy)]
pub struct AdtDesc {
    pub kind: AdtKind,
    /// Fully qualified path without generic arguments.
    pub path: &'static str,
    /// Generic type arguments, in declaration order.
    pub args: &'static [&'static TypeDesc],
    /// Const generic arguments, widened to `u128`.
    pub consts: &'static [u128],
    /// Declaration site as `file:line:column`, separating same-named items
    /// declared in different function bodies. Empty for library types.
    pub site: &'static str,
    /// Direct base classes. Not part of the type's identity.
    pub bases: &'static [&'static TypeDesc],
}

/// Structural description of a type.
#[derive(Debug, Clone, Copy)]
pub enum TypeDesc {
    Void,
    NullPointer,
    /// Arithmetic primitive, by its Rust name.
    Primitive(&'static str),
    Qualified {
        is_const: bool,
        is_volatile: bool,
        inner: &'static TypeDesc,
    },
    Pointer {
        mutable: bool,
        pointee: &'static TypeDesc,
    },
    Reference {
        kind: RefKind,
        referent: &'static TypeDesc,
    },
    /// `len` is `None` for `[T]`.
    Array {
        element: &'static TypeDesc,
        len: Option<usize>,
    },
    Function(FnDesc),
    MemberPointer {
        member: &'static TypeDesc,
        class: &'static TypeDesc,
    },
    Adt(AdtDesc),
}

impl TypeDesc {
    /// Structural identity.
    pub const fn same(a: &TypeDesc, b: &TypeDesc) -> bool {
        match (a, b) {
            (TypeDesc::Void, TypeDesc::Void) => true,
            (TypeDesc::NullPointer, TypeDesc::NullPointer) => true,
            (TypeDesc::Primitive(x), TypeDesc::Primitive(y)) => str_eq(x, y),
            (
                TypeDesc::Qualified { is_const: c1, is_volatile: v1, inner: i1 },
                TypeDesc::Qualified { is_const: c2, is_volatile: v2, inner: i2 },
            ) => *c1 == *c2 && *v1 == *v2 && Self::same(i1, i2),
            (
                TypeDesc::Pointer { mutable: m1, pointee: p1 },
                TypeDesc::Pointer { mutable: m2, pointee: p2 },
            ) => *m1 == *m2 && Self::same(p1, p2),
            (
                TypeDesc::Reference { kind: k1, referent: r1 },
                TypeDesc::Reference { kind: k2, referent: r2 },
            ) => (*k1 as u8) == (*k2 as u8) && Self::same(r1, r2),
            (
                TypeDesc::Array { element: e1, len: l1 },
                TypeDesc::Array { element: e2, len: l2 },
            ) => len_eq(*l1, *l2) && Self::same(e1, e2),
            (TypeDesc::Function(f1), TypeDesc::Function(f2)) => {
                str_eq(f1.abi, f2.abi)
                    && f1.is_unsafe == f2.is_unsafe
                    && f1.variadic == f2.variadic
                    && Self::same(f1.output, f2.output)
                    && Self::same_list(f1.inputs, f2.inputs)
            }
            (
                TypeDesc::MemberPointer { member: m1, class: c1 },
                TypeDesc::MemberPointer { member: m2, class: c2 },
            ) => Self::same(m1, m2) && Self::same(c1, c2),
            (TypeDesc::Adt(a1), TypeDesc::Adt(a2)) => {
                (a1.kind as u8) == (a2.kind as u8)
                    && str_eq(a1.path, a2.path)
                    && str_eq(a1.site, a2.site)
                    && Self::same_list(a1.args, a2.args)
                    && Self::same_consts(a1.consts, a2.consts)
            }
            _ => false,
        }
    }

    const fn same_consts(a: &[u128], b: &[u128]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    const fn same_list(a: &[&TypeDesc], b: &[&TypeDesc]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut i = 0;
        while i < a.len() {
            if !Self::same(a[i], b[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `inner` with the given qualifiers added, merged into a qualifier
    /// `inner` already carries so that one layer is ever present.
    pub const fn qualified(is_const: bool, is_volatile: bool, inner: &'static TypeDesc) -> TypeDesc {
        match inner {
            TypeDesc::Qualified { is_const: c, is_volatile: v, inner } => TypeDesc::Qualified {
                is_const: is_const || *c,
                is_volatile: is_volatile || *v,
                inner: *inner,
            },
            _ => TypeDesc::Qualified { is_const, is_volatile, inner },
        }
    }

    /// The descriptor with its top-level const/volatile qualifier removed.
    pub const fn strip_qualifiers(&self) -> &TypeDesc {
        match self {
            TypeDesc::Qualified { inner, .. } => *inner,
            other => other,
        }
    }

    pub const fn is_class(&self) -> bool {
        matches!(self.strip_qualifiers(), TypeDesc::Adt(AdtDesc { kind: AdtKind::Class, .. }))
    }

    /// Declared direct bases; empty for anything but a class.
    pub const fn bases(&self) -> &'static [&'static TypeDesc] {
        match self.strip_qualifiers() {
            TypeDesc::Adt(adt) => adt.bases,
            _ => &[],
        }
    }

    /// Number of array dimensions, looking through qualifiers.
    pub const fn rank(&self) -> usize {
        let mut rank = 0;
        let mut cur = self.strip_qualifiers();
        while let TypeDesc::Array { element, .. } = cur {
            rank += 1;
            cur = element.strip_qualifiers();
        }
        rank
    }

    /// Length of dimension `dim`; 0 when that dimension is unbounded or
    /// does not exist.
    pub const fn extent(&self, dim: usize) -> usize {
        let mut remaining = dim;
        let mut cur = self.strip_qualifiers();
        loop {
            match cur {
                TypeDesc::Array { element, len } => {
                    if remaining == 0 {
                        return match len {
                            Some(n) => *n,
                            None => 0,
                        };
                    }
                    remaining -= 1;
                    cur = element.strip_qualifiers();
                }
                _ => return 0,
            }
        }
    }

    /// The innermost element type, peeling every array dimension.
    pub const fn remove_all_extents(&self) -> &TypeDesc {
        let mut cur = self;
        while let TypeDesc::Array { element, .. } = cur.strip_qualifiers() {
            cur = *element;
        }
        cur
    }

    /// Whether `derived` is `base` or reaches it through declared bases.
    /// Both must be classes.
    pub const fn derives_from(derived: &TypeDesc, base: &TypeDesc) -> bool {
        if !derived.is_class() || !base.is_class() {
            return false;
        }
        Self::search_bases(derived.strip_qualifiers(), base.strip_qualifiers())
    }

    const fn search_bases(derived: &TypeDesc, base: &TypeDesc) -> bool {
        if Self::same(derived, base) {
            return true;
        }
        let bases = derived.bases();
        let mut i = 0;
        while i < bases.len() {
            if Self::search_bases(bases[i].strip_qualifiers(), base) {
                return true;
            }
            i += 1;
        }
        false
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        TypeDesc::same(self, other)
    }
}

impl Eq for TypeDesc {}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[&TypeDesc]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Void => f.write_str("()"),
            TypeDesc::NullPointer => f.write_str("NullPtr"),
            TypeDesc::Primitive(name) => f.write_str(name),
            TypeDesc::Qualified { is_const, is_volatile, inner } => {
                if *is_const {
                    f.write_str("const ")?;
                }
                if *is_volatile {
                    f.write_str("volatile ")?;
                }
                write!(f, "{inner}")
            }
            TypeDesc::Pointer { mutable: true, pointee } => write!(f, "*mut {pointee}"),
            TypeDesc::Pointer { mutable: false, pointee } => write!(f, "*const {pointee}"),
            TypeDesc::Reference { kind: RefKind::Shared, referent } => write!(f, "&{referent}"),
            TypeDesc::Reference { kind: RefKind::Mutable, referent } => write!(f, "&mut {referent}"),
            TypeDesc::Reference { kind: RefKind::Rvalue, referent } => write!(f, "&&{referent}"),
            TypeDesc::Array { element, len: Some(n) } => write!(f, "[{element}; {n}]"),
            TypeDesc::Array { element, len: None } => write!(f, "[{element}]"),
            TypeDesc::Function(sig) => {
                if sig.is_unsafe {
                    f.write_str("unsafe ")?;
                }
                if sig.abi != "Rust" {
                    write!(f, "extern \"{}\" ", sig.abi)?;
                }
                f.write_str("fn(")?;
                write_list(f, sig.inputs)?;
                if sig.variadic {
                    f.write_str(", ...")?;
                }
                f.write_str(")")?;
                match sig.output {
                    TypeDesc::Void => Ok(()),
                    output => write!(f, " -> {output}"),
                }
            }
            TypeDesc::MemberPointer { member, class } => write!(f, "{member} {class}::*"),
            TypeDesc::Adt(adt) => {
                f.write_str(adt.path)?;
                if adt.args.is_empty() && adt.consts.is_empty() {
                    return Ok(());
                }
                f.write_str("<")?;
                write_list(f, adt.args)?;
                for (i, value) in adt.consts.iter().enumerate() {
                    if i > 0 || !adt.args.is_empty() {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    const I32: TypeDesc = TypeDesc::Primitive("i32");
    const BASE: TypeDesc = TypeDesc::Adt(AdtDesc {
        kind: AdtKind::Class,
        path: "tests::Base",
        args: &[],
        consts: &[],
        site: "",
        bases: &[],
    });
    const MID: TypeDesc = TypeDesc::Adt(AdtDesc {
        kind: AdtKind::Class,
        path: "tests::Mid",
        args: &[],
        consts: &[],
        site: "",
        bases: &[&BASE],
    });
    const LEAF: TypeDesc = TypeDesc::Adt(AdtDesc {
        kind: AdtKind::Class,
        path: "tests::Leaf",
        args: &[],
        consts: &[],
        site: "",
        bases: &[&I32, &MID],
    });

    #[test]
    fn test_identity_ignores_nothing_but_bases() {
        let const_i32 = TypeDesc::Qualified { is_const: true, is_volatile: false, inner: &I32 };
        assert!(TypeDesc::same(&I32, &TypeDesc::Primitive("i32")));
        assert!(!TypeDesc::same(&I32, &const_i32));
        assert_eq!(const_i32.strip_qualifiers(), &I32);

        let unbased = TypeDesc::Adt(AdtDesc {
            kind: AdtKind::Class,
            path: "tests::Mid",
            args: &[],
            consts: &[],
            site: "",
            bases: &[],
        });
        assert_eq!(unbased, MID);
    }

    #[test]
    fn test_qualifiers_merge_into_one_layer() {
        const CONST_I32: TypeDesc = TypeDesc::qualified(true, false, &I32);
        let twice = TypeDesc::qualified(true, false, &CONST_I32);
        assert_eq!(twice, CONST_I32);
        let both = TypeDesc::qualified(false, true, &CONST_I32);
        assert_eq!(both, TypeDesc::Qualified { is_const: true, is_volatile: true, inner: &I32 });
        assert_eq!(both.strip_qualifiers(), &I32);
    }

    #[test]
    fn test_declaration_site_is_identity() {
        const HERE: TypeDesc = TypeDesc::Adt(AdtDesc {
            kind: AdtKind::Class,
            path: "tests::Item",
            args: &[],
            consts: &[],
            site: "src/a.rs:3:5",
            bases: &[],
        });
        const THERE: TypeDesc = TypeDesc::Adt(AdtDesc {
            kind: AdtKind::Class,
            path: "tests::Item",
            args: &[],
            consts: &[],
            site: "src/a.rs:9:5",
            bases: &[],
        });
        assert_ne!(HERE, THERE);
        assert_eq!(HERE.to_string(), THERE.to_string());
    }

    #[test]
    fn test_array_shape() {
        const INNER: TypeDesc = TypeDesc::Array { element: &I32, len: Some(4) };
        let outer = TypeDesc::Array { element: &INNER, len: None };
        assert_eq!(outer.rank(), 2);
        assert_eq!(outer.extent(0), 0);
        assert_eq!(outer.extent(1), 4);
        assert_eq!(outer.extent(2), 0);
        assert_eq!(outer.remove_all_extents(), &I32);
        assert_eq!(I32.rank(), 0);
    }

    #[test]
    fn test_base_search_walks_every_branch() {
        assert!(TypeDesc::derives_from(&LEAF, &BASE));
        assert!(TypeDesc::derives_from(&LEAF, &LEAF));
        assert!(!TypeDesc::derives_from(&BASE, &LEAF));
        assert!(!TypeDesc::derives_from(&I32, &I32));
    }

    #[test]
    fn test_display() {
        let sig = TypeDesc::Function(FnDesc {
            abi: "C",
            is_unsafe: true,
            variadic: true,
            inputs: &[&I32],
            output: &TypeDesc::Void,
        });
        assert_eq!(sig.to_string(), "unsafe extern \"C\" fn(i32, ...)");
        let ptr = TypeDesc::Pointer { mutable: false, pointee: &I32 };
        assert_eq!(ptr.to_string(), "*const i32");
        assert_eq!(MID.to_string(), "tests::Mid");
    }
}
