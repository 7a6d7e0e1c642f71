#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    Dismiss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuPresentation {
    pub panel_shown: bool,
    pub overlay_shown: bool,
    pub aria_expanded: &'static str,
    pub icon: &'static str,
    pub body_overflow: &'static str,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) | (Self::Open, MenuEvent::Dismiss) => Self::Closed,
            (Self::Closed, MenuEvent::Dismiss) => Self::Closed,
        }
    }

    pub fn presentation(self) -> MenuPresentation {
        match self {
            Self::Closed => MenuPresentation {
                panel_shown: false,
                overlay_shown: false,
                aria_expanded: "false",
                icon: "fa-bars",
                body_overflow: "",
            },
            Self::Open => MenuPresentation {
                panel_shown: true,
                overlay_shown: true,
                aria_expanded: "true",
                icon: "fa-times",
                body_overflow: "hidden",
            },
        }
    }
}

pub fn event_for_key(key: &str) -> Option<MenuEvent> {
    (key == "Escape").then_some(MenuEvent::Dismiss)
}

#[cfg(test)]
impl MenuState {
    fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_scroll_unlocked() {
        let initial = MenuState::default();
        assert_eq!(initial, MenuState::Closed);
        assert_eq!(initial.presentation().body_overflow, "");
        assert_eq!(initial.presentation().aria_expanded, "false");
    }

    #[test]
    fn open_locks_scroll_and_swaps_icon() {
        let open = MenuState::Closed.apply(MenuEvent::Toggle);
        let view = open.presentation();

        assert!(open.is_open());
        assert!(view.panel_shown && view.overlay_shown);
        assert_eq!(view.aria_expanded, "true");
        assert_eq!(view.icon, "fa-times");
        assert_eq!(view.body_overflow, "hidden");
    }

    #[test]
    fn toggles_in_pairs_restore_presentation() {
        let initial = MenuState::default();
        let open = initial.apply(MenuEvent::Toggle);
        let closed = open.apply(MenuEvent::Toggle);
        let reopened = closed.apply(MenuEvent::Toggle);

        assert_eq!(closed.presentation(), initial.presentation());
        assert_eq!(reopened.presentation(), open.presentation());
    }

    #[test]
    fn escape_only_acts_while_open() {
        let escape = event_for_key("Escape").expect("escape dismisses");

        assert_eq!(MenuState::Closed.apply(escape), MenuState::Closed);

        let closed = MenuState::Open.apply(escape);
        assert_eq!(closed, MenuState::Closed);
        assert_eq!(closed.apply(escape), MenuState::Closed);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(event_for_key("Enter"), None);
        assert_eq!(event_for_key("escape"), None);
    }
}
