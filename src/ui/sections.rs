use iced::{
    font,
    widget::{button, column, container, row, text, Column, Row, Space},
    Alignment, Color, Element, Font, Length,
};

use super::PageMessage;
use crate::domain::content::{Content, Education, Experience, Project, Publication};

pub const NAVY: Color = Color::from_rgb8(0x1D, 0x35, 0x57);
pub const ACCENT: Color = Color::from_rgb8(0x45, 0x7B, 0x9D);
pub const MUTED: Color = Color::from_rgb8(0x4B, 0x55, 0x63);

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

fn heading<'a>(label: &'a str) -> Element<'a, PageMessage> {
    text(label).size(36).font(BOLD).color(NAVY).into()
}

fn card<'a>(content: impl Into<Element<'a, PageMessage>>) -> Element<'a, PageMessage> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn tags<'a>(items: &'a [String]) -> Element<'a, PageMessage> {
    Row::with_children(items.iter().map(|item| {
        container(text(item).size(13))
            .padding([4, 12])
            .style(container::rounded_box)
            .into()
    }))
    .spacing(8)
    .wrap()
    .into()
}

fn link<'a>(label: &'a str, url: &str) -> Element<'a, PageMessage> {
    button(text(label).color(NAVY))
        .style(button::text)
        .on_press(PageMessage::OpenLink(url.to_string()))
        .into()
}

fn section<'a>(body: Column<'a, PageMessage>) -> Element<'a, PageMessage> {
    container(body.spacing(24).max_width(960))
        .center_x(Length::Fill)
        .padding([64, 20])
        .into()
}

pub fn home<'a>(content: &'a Content, title: &'a str, downloading: bool) -> Element<'a, PageMessage> {
    let profile = &content.profile;

    let links = row![
        link("GitHub", &profile.github),
        link("LinkedIn", &profile.linkedin),
        link("Email", &format!("mailto:{}", profile.email)),
    ]
    .spacing(16);

    let resume = button(text(if downloading {
        "Downloading..."
    } else {
        "Download Resume"
    }))
    .padding([12, 24])
    .on_press_maybe((!downloading).then_some(PageMessage::DownloadResume));

    section(
        column![
            Space::new().height(Length::Fixed(80.0)),
            text(&profile.name).size(72).font(BOLD).color(ACCENT),
            text(title).size(22).color(NAVY),
            links,
            resume,
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
}

pub fn about(content: &Content) -> Element<'_, PageMessage> {
    section(column![
        heading("About Me"),
        text(&content.profile.about).size(18).color(MUTED),
    ])
}

pub fn education(entries: &[Education]) -> Element<'_, PageMessage> {
    section(column![
        heading("Education"),
        Column::with_children(entries.iter().map(|edu| {
            card(column![
                text(&edu.school).size(24).color(NAVY),
                text(&edu.degree).size(18),
                text(format!("{} • {}", edu.period, edu.location))
                    .size(14)
                    .color(MUTED),
                text(&edu.description),
            ]
            .spacing(6))
        }))
        .spacing(24),
    ])
}

pub fn experience(entries: &[Experience]) -> Element<'_, PageMessage> {
    section(column![
        heading("Experience"),
        Column::with_children(entries.iter().map(|exp| {
            card(column![
                text(&exp.company).size(24).color(NAVY),
                text(&exp.role).size(18),
                text(&exp.period).size(14).color(MUTED),
                text(&exp.description),
                tags(&exp.technologies),
            ]
            .spacing(6))
        }))
        .spacing(24),
    ])
}

pub fn publications(entries: &[Publication]) -> Element<'_, PageMessage> {
    section(column![
        heading("Publications"),
        Column::with_children(entries.iter().map(|publication| {
            card(column![
                text(&publication.title).size(24).color(NAVY),
                text(format!("{} • {}", publication.venue, publication.date))
                    .size(14)
                    .color(MUTED),
                text(&publication.summary),
                row![
                    link("Read Paper", &publication.link),
                    text(format!("DOI: {}", publication.doi))
                        .size(14)
                        .color(MUTED),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            ]
            .spacing(8))
        }))
        .spacing(24),
    ])
}

pub fn projects(entries: &[Project]) -> Element<'_, PageMessage> {
    section(column![
        heading("Projects"),
        Column::with_children(entries.iter().map(|project| {
            let mut body = column![
                text(&project.title).size(22).color(NAVY),
                text(&project.description),
                tags(&project.technologies),
            ]
            .spacing(8);
            if let Some(url) = &project.link {
                body = body.push(link("View Project", url));
            }
            card(body)
        }))
        .spacing(24),
    ])
}

pub fn skills(skills: &[String]) -> Element<'_, PageMessage> {
    section(column![heading("Skills & Technologies"), tags(skills)])
}

pub fn contact<'a>(
    content: &'a Content,
    form: Element<'a, PageMessage>,
) -> Element<'a, PageMessage> {
    let profile = &content.profile;

    let info = card(
        column![
            text("Contact Information").size(20).color(NAVY),
            link("Email", &format!("mailto:{}", profile.email)),
            text(&profile.email).size(14).color(MUTED),
            link("LinkedIn", &profile.linkedin),
            text("Connect with me").size(14).color(MUTED),
            link("GitHub", &profile.github),
            text("Check out my projects").size(14).color(MUTED),
        ]
        .spacing(6),
    );

    section(column![
        heading("Get in Touch"),
        row![card(form), info].spacing(32),
    ])
}
