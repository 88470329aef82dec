use iced::{
    widget::{column, operation, scrollable, scrollable::RelativeOffset, scrollable::Viewport},
    window, Element, Length, Size, Subscription, Task,
};

use crate::application::{DownloadResult, ResumeDownloader};
use crate::domain::{Content, DownloadPhase, SaveOutcome};
use crate::ui::{
    nav::Section,
    page_id,
    rotating_title::ROTATION_INTERVAL,
    PageAction, PageMessage, PortfolioView,
};

pub struct Portfolio {
    view: PortfolioView,
    content: Content,
    downloader: ResumeDownloader,
}

impl Portfolio {
    pub fn new(content: Content, downloader: ResumeDownloader) -> Self {
        Self {
            view: PortfolioView::default(),
            content,
            downloader,
        }
    }
}

pub fn title(app: &Portfolio) -> String {
    format!("{} | Portfolio", app.content.profile.name)
}

#[derive(Debug, Clone)]
pub enum Message {
    Page(PageMessage),
    PageScrolled(Viewport),
    WindowResized(Size),
    RotateTitle,
    /// Final result of a resume download attempt
    ResumeDownloadFinished(DownloadResult),
}

pub fn update(app: &mut Portfolio, message: Message) -> Task<Message> {
    match message {
        Message::Page(PageMessage::DownloadResume) => {
            return start_resume_download(&app.downloader).unwrap_or_else(Task::none);
        }
        Message::Page(page_msg) => match app.view.update(page_msg, &app.content) {
            Some(PageAction::ScrollTo(section)) => return scroll_to(section),
            Some(PageAction::Open(url)) => open_link(&url),
            None => {}
        },
        Message::PageScrolled(viewport) => {
            app.view.nav.on_scroll(viewport.relative_offset().y);
        }
        Message::WindowResized(size) => {
            app.view.nav.on_resize(size.width);
        }
        Message::RotateTitle => {
            app.view.titles.advance(app.content.profile.titles.len());
        }
        Message::ResumeDownloadFinished(result) => {
            // Failures were already shown to the user by the downloader.
            if let Ok(SaveOutcome::Saved(path)) = result {
                tracing::debug!(path = %path.display(), "resume download finished");
            }
        }
    }
    Task::none()
}

pub fn view(app: &Portfolio) -> Element<'_, Message> {
    let downloading = app.downloader.phase() == DownloadPhase::InProgress;
    let body = Element::from(app.view.body(&app.content, downloading))
        .map(Message::Page);

    let page = scrollable(body)
        .id(page_id())
        .on_scroll(Message::PageScrolled)
        .height(Length::Fill);

    column![app.view.header(&app.content).map(Message::Page), page].into()
}

pub fn subscription(_app: &Portfolio) -> Subscription<Message> {
    Subscription::batch([
        iced::time::every(ROTATION_INTERVAL).map(|_| Message::RotateTitle),
        window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
    ])
}

/// Raise the in-progress flag now so the next view already shows the busy
/// button, and hand the guard to the task. `None` while an attempt runs.
fn start_resume_download(downloader: &ResumeDownloader) -> Option<Task<Message>> {
    let Some(guard) = downloader.begin() else {
        tracing::debug!("resume download already in progress");
        return None;
    };

    let downloader = downloader.clone();
    Some(Task::perform(
        async move { downloader.run(guard).await },
        Message::ResumeDownloadFinished,
    ))
}

fn scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(
        page_id(),
        RelativeOffset {
            x: 0.0,
            y: section.scroll_offset(),
        },
    )
}

fn open_link(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!(%url, error = %e, "failed to open link");
    }
}
