pub mod contact;
pub mod nav;
pub mod rotating_title;
pub mod sections;

use iced::{
    widget::{column, Column, Id},
    Element,
};

use crate::domain::Content;
use contact::{ContactForm, ContactMessage};
use nav::{NavMessage, Navigation, Section};
use rotating_title::TitleRotation;

/// Scrollable that holds every section
pub const PAGE_ID: &str = "portfolio-page";

pub fn page_id() -> Id {
    Id::new(PAGE_ID)
}

#[derive(Debug, Clone)]
pub enum PageMessage {
    Nav(NavMessage),
    Contact(ContactMessage),
    OpenLink(String),
    DownloadResume,
}

/// What the page needs the app to do after a local update
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    ScrollTo(Section),
    Open(String),
}

/// Presentation state of the page
#[derive(Debug, Default)]
pub struct PortfolioView {
    pub nav: Navigation,
    pub titles: TitleRotation,
    pub contact: ContactForm,
}

impl PortfolioView {
    pub fn update(&mut self, message: PageMessage, content: &Content) -> Option<PageAction> {
        match message {
            PageMessage::Nav(msg) => self.nav.update(msg).map(PageAction::ScrollTo),
            PageMessage::Contact(msg) => self
                .contact
                .update(msg, &content.profile.email)
                .map(PageAction::Open),
            PageMessage::OpenLink(url) => Some(PageAction::Open(url)),
            PageMessage::DownloadResume => {
                // Will be handled by the app
                None
            }
        }
    }

    pub fn header<'a>(&self, content: &'a Content) -> Element<'a, PageMessage> {
        self.nav.view(&content.profile.initials).map(PageMessage::Nav)
    }

    pub fn body<'a>(&'a self, content: &'a Content, downloading: bool) -> Column<'a, PageMessage> {
        let title = self.titles.current(&content.profile.titles);
        let form = self.contact.view().map(PageMessage::Contact);

        column![
            sections::home(content, title, downloading),
            sections::about(content),
            sections::education(&content.education),
            sections::experience(&content.experience),
            sections::publications(&content.publications),
            sections::projects(&content.projects),
            sections::skills(&content.skills),
            sections::contact(content, form),
        ]
    }
}
