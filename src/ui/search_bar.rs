// SPDX-License-Identifier: MPL-2.0
//! Search bar sub-component: search term, sort field and sort direction.
//!
//! Sort changes apply immediately. Text edits are debounced: every edit
//! bumps a generation and asks the parent to schedule
//! [`Message::DebounceElapsed`]; only the latest generation is applied.

use crate::domain::gallery::{FilterOptions, SortBy, SortOrder};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text_input, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Search bar state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Text as typed, possibly not applied yet.
    input: String,
    /// Options the grid is currently filtered with.
    applied: FilterOptions,
    generation: u64,
}

/// Messages for the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Clears the term and applies immediately.
    Clear,
    SortByChanged(SortBy),
    ToggleSortOrder,
    /// The debounce delay for `generation` has elapsed.
    DebounceElapsed(u64),
}

/// Effects produced by search bar changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Schedule `Message::DebounceElapsed(generation)` after the debounce
    /// delay.
    ScheduleApply(u64),
    /// The applied filter options changed.
    Apply,
}

impl State {
    /// Starts with `options` already applied.
    #[must_use]
    pub fn new(options: FilterOptions) -> Self {
        Self {
            input: options.search_term.clone(),
            applied: options,
            generation: 0,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.applied
    }

    /// Handle a search bar message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::InputChanged(value) => {
                self.input = value;
                self.generation += 1;
                Effect::ScheduleApply(self.generation)
            }
            Message::Clear => {
                self.input.clear();
                self.generation += 1;
                self.apply_input()
            }
            Message::SortByChanged(sort_by) => {
                if self.applied.sort_by == sort_by {
                    return Effect::None;
                }
                self.applied.sort_by = sort_by;
                Effect::Apply
            }
            Message::ToggleSortOrder => {
                self.applied.sort_order = self.applied.sort_order.toggled();
                Effect::Apply
            }
            Message::DebounceElapsed(generation) => {
                if generation != self.generation {
                    return Effect::None;
                }
                self.apply_input()
            }
        }
    }

    fn apply_input(&mut self) -> Effect {
        if self.applied.search_term == self.input {
            return Effect::None;
        }
        self.applied.search_term = self.input.clone();
        Effect::Apply
    }
}

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub result_count: usize,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.state.input())
        .on_input(Message::InputChanged)
        .on_submit(Message::DebounceElapsed(ctx.state.generation))
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let sort_button = |sort_by: SortBy| {
        let key = match sort_by {
            SortBy::GalleryName => "sort-by-gallery",
            SortBy::Url => "sort-by-url",
        };
        let style = if ctx.state.options().sort_by == sort_by {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::SortByChanged(sort_by))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(style)
    };

    let order_key = match ctx.state.options().sort_order {
        SortOrder::Asc => "sort-ascending",
        SortOrder::Desc => "sort-descending",
    };
    let order_button = button(Text::new(ctx.i18n.tr(order_key)).size(typography::BODY))
        .on_press(Message::ToggleSortOrder)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::unselected);

    let count = Text::new(ctx.i18n.tr_with_args(
        "search-results",
        &[("count", FluentValue::from(ctx.result_count))],
    ))
    .size(typography::CAPTION);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input);

    if !ctx.state.input().is_empty() {
        row = row.push(
            button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::Clear)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::unselected),
        );
    }

    let row = SortBy::ALL
        .iter()
        .fold(row, |row, sort_by| row.push(sort_button(*sort_by)))
        .push(order_button)
        .push(count);

    container(row)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_schedules_a_debounced_apply() {
        let mut state = State::default();
        let effect = state.handle(Message::InputChanged("cat".into()));

        assert_eq!(effect, Effect::ScheduleApply(1));
        assert_eq!(state.input(), "cat");
        assert_eq!(state.options().search_term, "");
    }

    #[test]
    fn only_latest_debounce_applies() {
        let mut state = State::default();
        state.handle(Message::InputChanged("c".into()));
        state.handle(Message::InputChanged("ca".into()));
        state.handle(Message::InputChanged("cat".into()));

        assert_eq!(state.handle(Message::DebounceElapsed(1)), Effect::None);
        assert_eq!(state.handle(Message::DebounceElapsed(2)), Effect::None);
        assert_eq!(state.options().search_term, "");

        assert_eq!(state.handle(Message::DebounceElapsed(3)), Effect::Apply);
        assert_eq!(state.options().search_term, "cat");
    }

    #[test]
    fn debounce_without_change_is_a_no_op() {
        let mut state = State::default();
        state.handle(Message::InputChanged("x".into()));
        state.handle(Message::InputChanged(String::new()));

        assert_eq!(state.handle(Message::DebounceElapsed(2)), Effect::None);
    }

    #[test]
    fn sort_changes_apply_immediately() {
        let mut state = State::default();

        assert_eq!(
            state.handle(Message::SortByChanged(SortBy::Url)),
            Effect::Apply
        );
        assert_eq!(state.options().sort_by, SortBy::Url);
        assert_eq!(
            state.handle(Message::SortByChanged(SortBy::Url)),
            Effect::None
        );

        assert_eq!(state.handle(Message::ToggleSortOrder), Effect::Apply);
        assert_eq!(state.options().sort_order, SortOrder::Desc);
    }

    #[test]
    fn clear_applies_without_waiting() {
        let mut state = State::new(FilterOptions {
            search_term: "dog".into(),
            ..FilterOptions::default()
        });

        assert_eq!(state.handle(Message::Clear), Effect::Apply);
        assert_eq!(state.options().search_term, "");
        assert_eq!(state.input(), "");
    }

    #[test]
    fn clear_supersedes_pending_debounce() {
        let mut state = State::default();
        state.handle(Message::InputChanged("dog".into()));
        state.handle(Message::Clear);

        assert_eq!(state.handle(Message::DebounceElapsed(1)), Effect::None);
        assert_eq!(state.options().search_term, "");
    }
}
