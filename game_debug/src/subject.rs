//! Subjects: the object or component a debug message is about.
//!
//! A subject only contributes a label in front of the message. A missing
//! reference never fails, it renders as `"None"`.

/// Label used for an absent object, component or owner
pub const NONE_LABEL: &str = "None";

/// Anything with a display name (actor, object, asset...)
pub trait Named {
    fn name(&self) -> &str;
}

/// A named part of an object (e.g. a health component on an actor)
pub trait Component: Named {
    /// The object owning this component, if any
    fn owner(&self) -> Option<&dyn Named>;
}

impl Named for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// What a message is about
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    /// An object, labelled `"<name>"`
    Object(Option<&'a dyn Named>),

    /// A component, labelled `"<name> [Owner: <owner>]"`
    Component(Option<&'a dyn Component>),
}

impl<'a> Subject<'a> {
    /// Subject for an existing object
    pub fn object(object: &'a dyn Named) -> Self {
        Subject::Object(Some(object))
    }

    /// Subject for an existing component
    pub fn component(component: &'a dyn Component) -> Self {
        Subject::Component(Some(component))
    }

    /// Resolve the display label
    pub fn label(&self) -> String {
        match self {
            Subject::Object(object) => object
                .map(|o| o.name().to_string())
                .unwrap_or_else(|| NONE_LABEL.to_string()),
            Subject::Component(Some(component)) => {
                let owner = component.owner().map(|o| o.name()).unwrap_or(NONE_LABEL);
                format!("{} [Owner: {}]", component.name(), owner)
            }
            Subject::Component(None) => format!("{} [Owner: {}]", NONE_LABEL, NONE_LABEL),
        }
    }
}

impl std::fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Object(_) => write!(f, "Object({:?})", self.label()),
            Subject::Component(_) => write!(f, "Component({:?})", self.label()),
        }
    }
}

/// Prefix `message` with the subject label, if there is a subject
pub(crate) fn prefix_label(subject: Option<&Subject<'_>>, message: &str) -> String {
    match subject {
        Some(subject) => format!("{}: {}", subject.label(), message),
        None => message.to_string(),
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
