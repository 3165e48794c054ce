//! Sidebar state machine and viewport classification
//!
//! Desktop: an inline column that toggles between expanded and collapsed
//! (icon-only). Mobile: a slide-over sheet, closed until explicitly opened
//! and closed again on any entry selection. The state lives with the
//! component instance and starts fresh on every mount.

/// Widths below this many CSS pixels render the mobile sheet
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Viewport class, reactive to resize in the web layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn classify(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// Desktop column width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelWidth {
    #[default]
    Expanded,
    Collapsed,
}

impl PanelWidth {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PanelWidth::Expanded => PanelWidth::Collapsed,
            PanelWidth::Collapsed => PanelWidth::Expanded,
        }
    }
}

/// How the panel renders for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Slide-over sheet behind a trigger button
    Overlay { open: bool },
    /// Fixed column beside the content
    Inline { collapsed: bool },
}

impl RenderMode {
    pub fn is_overlay(self) -> bool {
        matches!(self, RenderMode::Overlay { .. })
    }

    /// Overlay sheet currently shown
    pub fn is_open(self) -> bool {
        matches!(self, RenderMode::Overlay { open: true })
    }

    /// Inline column reduced to icons
    pub fn is_collapsed(self) -> bool {
        matches!(self, RenderMode::Inline { collapsed: true })
    }
}

/// UI-local sidebar toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub width: PanelWidth,
    pub mobile_open: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.width == PanelWidth::Collapsed
    }

    pub fn toggle_collapsed(&mut self) {
        self.width = self.width.toggled();
    }

    pub fn open_mobile(&mut self) {
        self.mobile_open = true;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Selecting any entry dismisses the mobile sheet
    pub fn entry_selected(&mut self) {
        self.close_mobile();
    }

    pub fn render_mode(&self, viewport: Viewport) -> RenderMode {
        match viewport {
            Viewport::Mobile => RenderMode::Overlay {
                open: self.mobile_open,
            },
            Viewport::Desktop => RenderMode::Inline {
                collapsed: self.is_collapsed(),
            },
        }
    }

    /// Labels and the section heading hide only in the collapsed desktop column
    pub fn labels_visible(&self, viewport: Viewport) -> bool {
        !matches!(
            self.render_mode(viewport),
            RenderMode::Inline { collapsed: true }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_follows_viewport() {
        let mut state = PanelState::new();
        state.toggle_collapsed();
        state.open_mobile();

        let mobile = state.render_mode(Viewport::Mobile);
        assert!(mobile.is_overlay() && mobile.is_open() && !mobile.is_collapsed());
        assert!(state.labels_visible(Viewport::Mobile));

        let desktop = state.render_mode(Viewport::Desktop);
        assert!(!desktop.is_overlay() && !desktop.is_open() && desktop.is_collapsed());
        assert!(!state.labels_visible(Viewport::Desktop));
    }

    #[test]
    fn test_classify_breakpoint() {
        assert_eq!(Viewport::classify(375.0), Viewport::Mobile);
        assert_eq!(Viewport::classify(767.9), Viewport::Mobile);
        assert_eq!(Viewport::classify(768.0), Viewport::Desktop);
        assert_eq!(Viewport::classify(1440.0), Viewport::Desktop);
    }

    #[test]
    fn test_initial_state_is_expanded_and_closed() {
        let state = PanelState::new();
        assert_eq!(state.width, PanelWidth::Expanded);
        assert!(!state.mobile_open);
        assert_eq!(
            state.render_mode(Viewport::Desktop),
            RenderMode::Inline { collapsed: false }
        );
    }

    #[test]
    fn test_toggle_has_no_terminal_state() {
        let mut state = PanelState::new();
        for i in 0..6 {
            state.toggle_collapsed();
            assert_eq!(state.is_collapsed(), i % 2 == 0);
        }
        assert_eq!(state.width, PanelWidth::Expanded);
    }

    #[test]
    fn test_collapsed_hides_labels_on_desktop_only() {
        let mut state = PanelState::new();
        state.toggle_collapsed();

        assert!(!state.labels_visible(Viewport::Desktop));
        assert!(state.labels_visible(Viewport::Mobile));
    }

    #[test]
    fn test_entry_selection_closes_sheet() {
        let mut state = PanelState::new();
        state.open_mobile();
        assert_eq!(
            state.render_mode(Viewport::Mobile),
            RenderMode::Overlay { open: true }
        );

        state.entry_selected();
        assert_eq!(
            state.render_mode(Viewport::Mobile),
            RenderMode::Overlay { open: false }
        );
    }
}
