use api_client::error::ApiError;
use api_client::RecommendationRequest;

/// Where a click landed, relative to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    DropdownButton,
    DropdownMenu,
    Elsewhere,
}

/// Open/closed state of the header dropdown and the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub dropdown_open: bool,
    pub mobile_menu_open: bool,
}

impl NavigationState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Closes the dropdown on any click outside it and its button.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.dropdown_open = false;
        }
    }

    /// The hamburger icon shows while the mobile menu is closed.
    pub fn menu_icon_visible(&self) -> bool {
        !self.mobile_menu_open
    }

    pub fn close_icon_visible(&self) -> bool {
        self.mobile_menu_open
    }
}

/// Which half of the recommendation page is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormView {
    #[default]
    Form,
    Results,
}

/// State of the fund-goal form: the selected goal and which view is showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationForm {
    selected_goal: Option<String>,
    view: FormView,
}

impl RecommendationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_goal(&mut self, goal: &str) {
        self.selected_goal = Some(goal.to_string());
    }

    pub fn selected_goal(&self) -> Option<&str> {
        self.selected_goal.as_deref()
    }

    pub fn view(&self) -> FormView {
        self.view
    }

    /// Builds the request for the current goal. Fails without touching the
    /// view when no goal has been chosen.
    pub fn submit(&self, sip: f64, years: u32) -> Result<RecommendationRequest, ApiError> {
        RecommendationRequest::new(sip, years, self.selected_goal().unwrap_or_default())
    }

    /// Switches to the results view once a response has been rendered.
    pub fn show_results(&mut self) {
        self.view = FormView::Results;
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_closes_on_outside_click_only() {
        let mut nav = NavigationState::default();
        nav.toggle_dropdown();
        nav.click(ClickTarget::DropdownMenu);
        assert!(nav.dropdown_open);
        nav.click(ClickTarget::DropdownButton);
        assert!(nav.dropdown_open);
        nav.click(ClickTarget::Elsewhere);
        assert!(!nav.dropdown_open);
    }

    #[test]
    fn mobile_menu_swaps_icons() {
        let mut nav = NavigationState::default();
        assert!(nav.menu_icon_visible() && !nav.close_icon_visible());
        nav.toggle_mobile_menu();
        assert!(!nav.menu_icon_visible() && nav.close_icon_visible());
        nav.toggle_mobile_menu();
        assert!(nav.menu_icon_visible());
    }

    #[test]
    fn form_requires_a_goal_and_resets() {
        let mut form = RecommendationForm::new();
        assert!(form.submit(5000.0, 10).is_err());
        assert_eq!(form.view(), FormView::Form);

        form.select_goal("retirement");
        let request = form.submit(5000.0, 10).unwrap();
        assert_eq!(request.goal, "retirement");

        form.show_results();
        assert_eq!(form.view(), FormView::Results);
        form.reset();
        assert_eq!(form, RecommendationForm::new());
    }
}
