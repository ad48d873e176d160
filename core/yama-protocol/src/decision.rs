use alloc::string::String;

use crate::token::RawToken;

/// Which base form a merged segment ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseForm {
    /// The accumulated segment keeps its base form (the continuation is absorbed).
    Previous,
    /// `previous.base_form + current.base_form`, taking the previous surface form when its base
    /// form is empty (100 + 円 gives 100円).
    Joined,
    /// Only the incoming token's base form (e.g. an honorific prefix is dropped).
    Current,
    /// A value computed by the rule itself.
    Literal(String),
}

impl BaseForm {
    pub fn resolve(&self, previous: &RawToken, current: &RawToken) -> String {
        match self {
            BaseForm::Previous => previous.base_form.clone(),
            BaseForm::Joined => {
                let head = if previous.base_form.is_empty() {
                    &previous.surface_form
                } else {
                    &previous.base_form
                };
                let mut joined = String::with_capacity(head.len() + current.base_form.len());
                joined.push_str(head);
                joined.push_str(&current.base_form);
                joined
            }
            BaseForm::Current => current.base_form.clone(),
            BaseForm::Literal(text) => text.clone(),
        }
    }
}

/// Outcome of comparing an accumulated segment with the token that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    Split,
    Merge(BaseForm),
}
