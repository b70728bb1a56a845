use crate::ui::listeners::ListenerId;
use crate::ui::mvi::UiState;

/// Which control inside an open dialog holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalFocus {
    #[default]
    CloseButton,
    Body,
}

impl ModalFocus {
    pub fn toggled(self) -> Self {
        match self {
            Self::CloseButton => Self::Body,
            Self::Body => Self::CloseButton,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        focus: ModalFocus,
        /// First visible content line.
        scroll: u16,
        /// Escape listener owned by this open period.
        escape_listener: ListenerId,
    },
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn focus(&self) -> Option<ModalFocus> {
        match self {
            Self::Open { focus, .. } => Some(*focus),
            Self::Closed => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            Self::Open { scroll, .. } => *scroll,
            Self::Closed => 0,
        }
    }

    pub fn escape_listener(&self) -> Option<ListenerId> {
        match self {
            Self::Open {
                escape_listener, ..
            } => Some(*escape_listener),
            Self::Closed => None,
        }
    }
}
