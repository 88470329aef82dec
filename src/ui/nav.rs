use iced::{
    widget::{button, column, container, row, text, Column, Row, Space},
    Alignment, Element, Length,
};

use super::sections::{ACCENT, MUTED, NAVY};

/// Windows narrower than this get the collapsible menu
pub const COMPACT_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Education,
    Experience,
    Publications,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Publications,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Publications => "Publications",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Relative vertical offset (0.0 top, 1.0 bottom) where this section starts
    pub fn scroll_offset(self) -> f32 {
        self.index() as f32 / (Self::ALL.len() - 1) as f32
    }

    /// Section whose start is nearest to the given relative offset
    pub fn at_scroll_offset(relative_y: f32) -> Section {
        if !relative_y.is_finite() {
            return Section::Home;
        }
        let last = Self::ALL.len() - 1;
        let index = (relative_y.clamp(0.0, 1.0) * last as f32).round() as usize;
        Self::ALL[index.min(last)]
    }
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    Select(Section),
    ToggleMenu,
}

#[derive(Debug)]
pub struct Navigation {
    active: Section,
    menu_open: bool,
    compact: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
            compact: false,
        }
    }
}

impl Navigation {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns the section the page should jump to, if any
    pub fn update(&mut self, message: NavMessage) -> Option<Section> {
        match message {
            NavMessage::Select(section) => {
                self.active = section;
                self.menu_open = false;
                Some(section)
            }
            NavMessage::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
        }
    }

    pub fn on_scroll(&mut self, relative_y: f32) {
        self.active = Section::at_scroll_offset(relative_y);
    }

    pub fn on_resize(&mut self, width: f32) {
        self.compact = width < COMPACT_WIDTH;
        if !self.compact {
            self.menu_open = false;
        }
    }

    pub fn view<'a>(&self, initials: &'a str) -> Element<'a, NavMessage> {
        let brand = button(text(initials).size(22).color(NAVY))
            .style(button::text)
            .on_press(NavMessage::Select(Section::Home));

        let header: Element<'a, NavMessage> = if self.compact {
            let toggle = button(text(if self.menu_open { "Close" } else { "Menu" }))
                .style(button::secondary)
                .on_press(NavMessage::ToggleMenu);
            row![brand, Space::new().width(Length::Fill), toggle]
                .align_y(Alignment::Center)
                .into()
        } else {
            let links = Row::with_children(Section::ALL.iter().map(|s| self.link(*s)))
                .spacing(8)
                .align_y(Alignment::Center);
            row![brand, Space::new().width(Length::Fill), links]
                .align_y(Alignment::Center)
                .into()
        };

        let mut bar = column![header];
        if self.compact && self.menu_open {
            bar = bar.push(Column::with_children(
                Section::ALL.iter().map(|s| self.link(*s)),
            ));
        }

        container(bar.spacing(4))
            .padding([8, 20])
            .width(Length::Fill)
            .into()
    }

    fn link<'a>(&self, section: Section) -> Element<'a, NavMessage> {
        let color = if section == self.active { ACCENT } else { MUTED };
        button(text(section.label()).color(color))
            .style(button::text)
            .on_press(NavMessage::Select(section))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_maps_to_sections() {
        assert_eq!(Section::at_scroll_offset(0.0), Section::Home);
        assert_eq!(Section::at_scroll_offset(1.0), Section::Contact);
        assert_eq!(Section::at_scroll_offset(0.5), Section::Publications);
        assert_eq!(Section::at_scroll_offset(-3.0), Section::Home);
        assert_eq!(Section::at_scroll_offset(f32::NAN), Section::Home);
    }

    #[test]
    fn test_section_offsets_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::at_scroll_offset(section.scroll_offset()), section);
        }
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = Navigation::default();
        nav.on_resize(400.0);
        nav.update(NavMessage::ToggleMenu);
        assert!(nav.is_menu_open());

        let target = nav.update(NavMessage::Select(Section::Projects));

        assert_eq!(target, Some(Section::Projects));
        assert_eq!(nav.active(), Section::Projects);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_widening_window_closes_menu() {
        let mut nav = Navigation::default();
        nav.on_resize(500.0);
        nav.update(NavMessage::ToggleMenu);
        nav.on_resize(1280.0);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_updates_active() {
        let mut nav = Navigation::default();
        nav.on_scroll(Section::Skills.scroll_offset());
        assert_eq!(nav.active(), Section::Skills);
    }
}
