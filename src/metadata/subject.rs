use std::any::TypeId;
use std::fmt;

/// Identity of a controller type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId {
    type_id: TypeId,
    name: &'static str,
}

impl ControllerId {
    pub fn of<C: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name of the controller.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity of one handler function: the controller that owns it plus the
/// member name it was declared under.
///
/// A member name is unique within a controller, so this names exactly one
/// function and is shared by every instance of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId {
    controller: ControllerId,
    member: &'static str,
}

impl HandlerId {
    pub fn new(controller: ControllerId, member: &'static str) -> Self {
        Self { controller, member }
    }

    pub fn of<C: 'static>(member: &'static str) -> Self {
        Self::new(ControllerId::of::<C>(), member)
    }

    pub fn controller(&self) -> ControllerId {
        self.controller
    }

    pub fn member(&self) -> &'static str {
        self.member
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.controller, self.member)
    }
}

/// What a metadata entry is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Controller(ControllerId),
    Handler(HandlerId),
}

impl From<ControllerId> for Subject {
    fn from(id: ControllerId) -> Self {
        Subject::Controller(id)
    }
}

impl From<HandlerId> for Subject {
    fn from(id: HandlerId) -> Self {
        Subject::Handler(id)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Controller(id) => write!(f, "controller `{}`", id),
            Subject::Handler(id) => write!(f, "handler `{}`", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Users;
    struct Orders;

    #[test]
    fn test_handler_identity() {
        assert_eq!(HandlerId::of::<Users>("list"), HandlerId::of::<Users>("list"));
        assert_ne!(HandlerId::of::<Users>("list"), HandlerId::of::<Orders>("list"));
        assert_ne!(HandlerId::of::<Users>("list"), HandlerId::of::<Users>("create"));
    }

    #[test]
    fn test_controller_and_handler_subjects_differ() {
        let controller: Subject = ControllerId::of::<Users>().into();
        let handler: Subject = HandlerId::of::<Users>("list").into();
        assert_ne!(controller, handler);
        assert!(handler.to_string().ends_with("Users::list`"));
    }
}
