// Blocking overlays
//
// While a modal is open it swallows every key; the only thing a key can do is
// close it.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Key reference, toggled with `?`
    Help,
    /// A document alert such as "Invalid!"
    Alert(String),
}

impl Modal {
    pub fn alert(message: impl Into<String>) -> Self {
        Modal::Alert(message.into())
    }

    /// Whether `key` dismisses this modal
    ///
    /// An alert only yields to an explicit acknowledgement, so a stray `q`
    /// cannot skip past it.
    pub fn closes_on(&self, key: KeyCode) -> bool {
        match self {
            Modal::Help => matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')),
            Modal::Alert(_) => matches!(key, KeyCode::Enter | KeyCode::Esc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_only_closes_on_enter_or_esc() {
        let modal = Modal::alert("Invalid!");
        assert!(!modal.closes_on(KeyCode::Char('q')));
        assert!(!modal.closes_on(KeyCode::Char('?')));
        assert!(modal.closes_on(KeyCode::Enter));
        assert!(modal.closes_on(KeyCode::Esc));
    }

    #[test]
    fn help_toggles_off_with_question_mark() {
        assert!(Modal::Help.closes_on(KeyCode::Char('?')));
        assert!(!Modal::Help.closes_on(KeyCode::Enter));
    }
}
