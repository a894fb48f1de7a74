// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! This is the view collaborator of the scheduler: it takes the current item
//! (if any), hands it to a host-supplied renderer closure, and wraps the
//! result in a toast card with an optional accent bar and a dismiss button.
//! The scheduler never inspects the renderer's output, and the overlay never
//! mutates state; everything flows back through [`Message`].

use crate::scheduler::{Message, Toaster};
use iced::widget::{button, container, text, Container, Row, Space};
use iced::{
    alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme, Vector,
};

/// Width of the accent bar on the card's leading edge.
const ACCENT_WIDTH: f32 = 8.0;

/// Height of the accent bar.
const ACCENT_HEIGHT: f32 = 24.0;

/// Corner radius of the toast card.
const CARD_RADIUS: f32 = 12.0;

/// Inner padding of the toast card.
const CARD_PADDING: f32 = 12.0;

/// Spacing between the accent bar, content, and dismiss button.
const CARD_SPACING: f32 = 8.0;

/// Outer margin between the card and the attachment edge.
const EDGE_MARGIN: f32 = 16.0;

/// Renders the toaster's overlay: the current toast as a top-centered card,
/// or an empty zero-size element while nothing is visible.
///
/// An in-progress swipe shifts the card toward the attachment edge by the
/// slot's drag offset, so the toast visibly follows the gesture.
///
/// `renderer` turns the payload into the card's content. Map the result into
/// the host's message type: `overlay::view(&toaster, render).map(Msg::Toast)`.
pub fn view<'a, T>(
    toaster: &'a Toaster<T>,
    renderer: impl Fn(&'a T) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let Some(item) = toaster.current() else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let accent = toaster.settings().accent_color();
    let card = card(renderer(item), accent, toaster.current_token());

    // Top-centered, clear of the edge, pulled toward it while swiped.
    Container::new(card)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top: card_top_margin(toaster.drag_offset()),
            right: EDGE_MARGIN,
            bottom: EDGE_MARGIN,
            left: EDGE_MARGIN,
        })
        .into()
}

/// Top margin of the card with the swipe displacement applied.
///
/// The drag offset is negative (toward dismissal), shrinking the margin; it
/// bottoms out at zero once the card reaches the edge.
fn card_top_margin(drag_offset: f32) -> f32 {
    (EDGE_MARGIN + drag_offset).max(0.0)
}

/// Builds the toast card: `[accent bar] [content] [dismiss button]`.
fn card<'a>(
    content: Element<'a, Message>,
    accent: Option<Color>,
    token: Option<crate::slot::PresentationToken>,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(CARD_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(accent) = accent {
        row = row.push(
            Container::new(
                Space::new()
                    .width(Length::Fixed(ACCENT_WIDTH))
                    .height(Length::Fixed(ACCENT_HEIGHT)),
            )
            .style(move |_theme: &Theme| accent_bar_style(accent)),
        );
    }

    row = row.push(Container::new(content).width(Length::Shrink));

    if let Some(token) = token {
        row = row.push(
            button(text("\u{2715}"))
                .on_press(Message::Dismiss(token))
                .padding(4)
                .style(dismiss_button_style),
        );
    }

    Container::new(row)
        .padding(CARD_PADDING)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Style for the toast card container.
fn card_style(theme: &Theme, accent: Option<Color>) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent.unwrap_or(bg_color),
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::BLACK,
            offset: Vector { x: 0.0, y: 4.0 },
            blur_radius: 8.0,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for the accent bar on the card's leading edge.
fn accent_bar_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent)),
        border: Border {
            radius: (ACCENT_WIDTH / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.15,
                ..base.text
            })),
            text_color: base.text,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_uses_accent_for_the_border() {
        let theme = Theme::Dark;
        let accent = Color::from_rgb(0.9, 0.2, 0.2);
        let style = card_style(&theme, Some(accent));

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn card_style_without_accent_blends_the_border() {
        let theme = Theme::Dark;
        let style = card_style(&theme, None);
        let bg = theme.extended_palette().background.base.color;

        assert_eq!(style.border.color, bg);
    }

    #[test]
    fn swipe_displacement_shrinks_the_top_margin() {
        use approx::assert_abs_diff_eq;

        assert_abs_diff_eq!(card_top_margin(0.0), EDGE_MARGIN);
        assert_abs_diff_eq!(card_top_margin(-10.0), EDGE_MARGIN - 10.0);
        // A drag past the edge never produces a negative margin.
        assert_abs_diff_eq!(card_top_margin(-40.0), 0.0);
    }

    #[test]
    fn accent_bar_is_filled_with_the_accent_color() {
        let accent = Color::from_rgb(0.2, 0.5, 0.9);
        let style = accent_bar_style(accent);

        assert_eq!(style.background, Some(Background::Color(accent)));
    }
}
