use thiserror::Error;

const MESSAGING_BASE_URL: &str = "https://wa.me";
const MESSAGE_PREFIX: &str = "User Feedback:\n";
pub const EMPTY_FEEDBACK_PROMPT: &str = "Please enter your feedback";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Hidden,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    Show,
    Hide,
}

impl PopupState {
    pub fn apply(self, event: PopupEvent) -> Self {
        match event {
            PopupEvent::Show => Self::Shown,
            PopupEvent::Hide => Self::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// A click closes the popup only when it lands on the backdrop itself, not
/// on the dialog inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("feedback text is empty")]
    Empty,
}

pub fn feedback_link(recipient: &str, raw_text: &str) -> Result<String, FeedbackError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(FeedbackError::Empty);
    }

    let message = urlencoding::encode(&format!("{MESSAGE_PREFIX}{text}")).into_owned();
    Ok(format!("{MESSAGING_BASE_URL}/{recipient}?text={message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FEEDBACK_RECIPIENT;

    #[test]
    fn hello_is_encoded_like_a_uri_component() {
        let link = feedback_link(DEFAULT_FEEDBACK_RECIPIENT, "hello").expect("non-empty text");

        assert_eq!(
            link,
            "https://wa.me/6282326744030?text=User%20Feedback%3A%0Ahello"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let link = feedback_link("123", "  broken link on /about \n").expect("non-empty text");
        assert!(link.ends_with("text=User%20Feedback%3A%0Abroken%20link%20on%20%2Fabout"));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(feedback_link("123", ""), Err(FeedbackError::Empty));
        assert_eq!(feedback_link("123", " \t\n "), Err(FeedbackError::Empty));
    }

    #[test]
    fn reserved_characters_cannot_break_out_of_the_query() {
        let link = feedback_link("123", "a&b=c?#").expect("non-empty text");
        assert!(link.ends_with("a%26b%3Dc%3F%23"));
    }

    #[test]
    fn popup_transitions_are_absolute() {
        assert_eq!(PopupState::default(), PopupState::Hidden);
        assert!(PopupState::Hidden.apply(PopupEvent::Show).is_shown());
        assert!(PopupState::Shown.apply(PopupEvent::Show).is_shown());
        assert_eq!(PopupState::Hidden.apply(PopupEvent::Hide), PopupState::Hidden);
    }

    #[test]
    fn only_clicks_on_the_backdrop_itself_dismiss() {
        let backdrop = "feedbackPopup";

        assert!(is_backdrop_click(Some(&backdrop), Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&"feedbackText"), Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&"popup-content"), Some(&backdrop)));
    }

    #[test]
    fn unmounted_backdrop_or_targetless_event_does_not_dismiss() {
        let backdrop = "feedbackPopup";

        assert!(!is_backdrop_click(None, Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&backdrop), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }
}
