//! The [`signature`](self) module describes the capability set of a mocked type:
//! the methods it provides, their parameters and their return types.

use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Implemented by every type generated by the [`mock!`](crate::mock) macro.
pub trait Mockable {
    /// Get the capability set of the mocked type.
    fn capabilities() -> Capabilities;
}

/// Identity of a mocked method: the trait it belongs to and its name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MethodId {
    trait_name: &'static str,
    name: &'static str,
}

impl MethodId {
    /// Create a new method identity.
    pub const fn new(trait_name: &'static str, name: &'static str) -> Self {
        Self { trait_name, name }
    }

    /// Name of the trait the method belongs to.
    pub fn trait_name(&self) -> &'static str {
        self.trait_name
    }

    /// Name of the method.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for MethodId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::{}", self.trait_name, self.name)
    }
}

/// Runtime representation of a rust type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TypeSignature {
    id: TypeId,
    name: &'static str,
}

impl TypeSignature {
    /// Get the signature of type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A single parameter of a mocked method.
///
/// The type is the owned type the argument is recorded as. A parameter of type
/// `&str` for example is recorded as `String`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParamSignature {
    name: &'static str,
    ty: TypeSignature,
}

impl ParamSignature {
    /// Create a new parameter named `name` that is recorded as type `T`.
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeSignature::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> &TypeSignature {
        &self.ty
    }
}

/// Signature of a single mocked method.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MethodSignature {
    id: MethodId,
    params: Vec<ParamSignature>,
    returns: TypeSignature,
    has_default: bool,
}

impl MethodSignature {
    /// Create a new signature for the method `id` that returns type `R`.
    pub fn new<R: 'static>(id: MethodId) -> Self {
        Self {
            id,
            params: Vec::new(),
            returns: TypeSignature::of::<R>(),
            has_default: true,
        }
    }

    /// Append a parameter to the signature.
    #[must_use]
    pub fn with_param(mut self, param: ParamSignature) -> Self {
        self.params.push(param);

        self
    }

    /// Mark the return type as having no default value.
    #[must_use]
    pub fn without_default(mut self) -> Self {
        self.has_default = false;

        self
    }

    pub fn id(&self) -> MethodId {
        self.id
    }

    pub fn params(&self) -> &[ParamSignature] {
        &self.params
    }

    /// Number of parameters the method takes, excluding the receiver.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn returns(&self) -> &TypeSignature {
        &self.returns
    }

    /// Returns `true` if an unstubbed call may return the default value of the
    /// return type.
    pub fn has_default(&self) -> bool {
        self.has_default
    }
}

impl Display for MethodSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.id)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty.name)?;
        }
        write!(f, ") -> {}", self.returns.name)
    }
}

/// Capability set of a mocked type: all methods the type provides.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Capabilities {
    type_name: &'static str,
    methods: Vec<MethodSignature>,
}

impl Capabilities {
    /// Create a new empty capability set for the type named `type_name`.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            methods: Vec::new(),
        }
    }

    /// Add a method to the capability set.
    #[must_use]
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);

        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    /// Get the signature of the method identified by `id`.
    pub fn get(&self, id: &MethodId) -> Option<&MethodSignature> {
        self.methods.iter().find(|m| m.id == *id)
    }
}
