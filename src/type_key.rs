// src/type_key.rs
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// Identity of a logging caller's type: a stable key plus the name shown in
/// log lines. Two keys are equal when their identities are equal.
#[derive(Debug, Clone)]
pub struct TypeKey {
    identity: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl TypeKey {
    /// Key for a Rust type. The identity is the full type path and the
    /// display name drops every module prefix (`app::net::Peer<app::Id>`
    /// shows as `Peer<Id>`).
    pub fn of<T: ?Sized>() -> Self {
        let path = std::any::type_name::<T>();
        TypeKey {
            identity: Cow::Borrowed(path),
            name: Cow::Owned(short_type_name(path)),
        }
    }

    /// Key for an explicit name, which doubles as the identity
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        TypeKey {
            identity: name.clone(),
            name,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

/// Anything that can say which type it logs as
pub trait TypeIdentity {
    fn type_key(&self) -> TypeKey;
}

impl TypeIdentity for TypeKey {
    fn type_key(&self) -> TypeKey {
        self.clone()
    }
}

impl TypeIdentity for str {
    fn type_key(&self) -> TypeKey {
        TypeKey::named(self.to_string())
    }
}

impl TypeIdentity for String {
    fn type_key(&self) -> TypeKey {
        TypeKey::named(self.clone())
    }
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for &T {
    fn type_key(&self) -> TypeKey {
        (**self).type_key()
    }
}

/// Strip module paths from every segment of a type path, generics included
pub fn short_type_name(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut segment_start = 0;
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push(c);
            segment_start = out.len();
        }
    }

    out
}
