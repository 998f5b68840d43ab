//! The scrolling landing page.
//!
//! The page is laid out as one long list of lines. Building it also records
//! where each section and animated element starts, which the app uses for
//! scroll spy, smooth scrolling and reveal-on-scroll.

use std::time::Instant;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::{stat_element_id, App, PageLayout, Target};
use crate::site::content::{
    BRAND, HERO_BUTTONS, PROCESS_STEPS, SERVICES, STATS, TAGLINE, TESTIMONIALS,
};
use crate::site::form::Field;
use crate::site::payment::PLANS;
use crate::site::portfolio::ALL;
use crate::site::scroll::SectionAnchor;

/// Element id of a service card
pub fn service_element_id(index: usize) -> String {
    format!("service-{index}")
}

/// Element id of a pricing card
pub fn plan_element_id(key: &str) -> String {
    format!("plan-{key}")
}

/// Label shown on a portfolio filter button
pub fn filter_label(id: &str) -> String {
    if id == ALL {
        return "All Projects".to_string();
    }
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn button_style(focused: bool, active: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if active {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn button(label: &str, focused: bool, active: bool) -> Span<'static> {
    Span::styled(format!("[ {label} ]"), button_style(focused, active))
}

struct PageBuilder<'a> {
    app: &'a App,
    now: Instant,
    focused: Option<Target>,
    lines: Vec<Line<'static>>,
    layout: PageLayout,
}

impl<'a> PageBuilder<'a> {
    fn new(app: &'a App, now: Instant) -> Self {
        Self {
            app,
            now,
            focused: app.focused_target(),
            lines: Vec::new(),
            layout: PageLayout::default(),
        }
    }

    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn is_focused(&self, target: &Target) -> bool {
        self.focused.as_ref() == Some(target)
    }

    fn anchor(&mut self, id: &str) {
        let top = self.row();
        self.layout.anchors.push(SectionAnchor::new(id, top));
    }

    fn element(&mut self, id: String) {
        let top = self.row();
        self.layout.elements.push((id, top));
    }

    /// Unrevealed elements are drawn dim until they scroll into view
    fn reveal_style(&self, id: &str) -> Style {
        if self.app.reveal.is_revealed(id) {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.push(
            Line::from(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        self.blank();
    }

    fn finish(mut self) -> (Vec<Line<'static>>, PageLayout) {
        self.layout.height = self.row();
        (self.lines, self.layout)
    }

    fn home(&mut self) {
        self.anchor("home");
        self.blank();
        self.push(
            Line::from(Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        self.push(Line::from(TAGLINE).centered());
        self.blank();

        let mut spans = Vec::new();
        for label in HERO_BUTTONS {
            let target = Target::Cta {
                label,
                in_service_card: false,
            };
            spans.push(button(label, self.is_focused(&target), false));
            spans.push(Span::raw("   "));
        }
        spans.pop();
        self.push(Line::from(spans).centered());
        self.blank();

        for (index, (label, _)) in STATS.iter().enumerate() {
            let id = stat_element_id(index);
            let style = self.reveal_style(&id);
            let value = self.app.counter_value(index, self.now);
            self.element(id);
            self.push(
                Line::from(vec![
                    Span::styled(
                        format!("{value:>5}+"),
                        style.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {label}"), style),
                ])
                .centered(),
            );
        }
        self.blank();
    }

    fn services(&mut self) {
        self.anchor("services");
        self.heading("Our Services");

        for (index, service) in SERVICES.iter().enumerate() {
            let id = service_element_id(index);
            let style = self.reveal_style(&id);
            self.element(id);
            self.push(Line::from(Span::styled(
                format!("  {}", service.title),
                style.add_modifier(Modifier::BOLD),
            )));
            self.push(Line::from(Span::styled(
                format!("  {}", service.blurb),
                style,
            )));
            let target = Target::Cta {
                label: service.button,
                in_service_card: true,
            };
            let focused = self.is_focused(&target);
            self.push(Line::from(vec![
                Span::raw("  "),
                button(service.button, focused, false),
            ]));
            self.blank();
        }

        let steps = PROCESS_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect::<Vec<_>>()
            .join("  →  ");
        self.push(Line::from(vec![
            Span::styled("  How we work: ", Style::default().fg(Color::DarkGray)),
            Span::raw(steps),
        ]));
        self.blank();
    }

    fn portfolio(&mut self) {
        self.anchor("portfolio");
        self.heading("Portfolio");

        let app = self.app;
        let portfolio = &app.portfolio;
        let mut spans = vec![Span::raw("  ")];
        for item in portfolio.filters().items() {
            let focused = matches!(&self.focused, Some(Target::Filter(f)) if *f == item.id);
            spans.push(button(&filter_label(&item.id), focused, item.active));
            spans.push(Span::raw(" "));
        }
        self.push(Line::from(spans));
        self.blank();

        let mut shown = 0;
        for item in portfolio.visible_items() {
            shown += 1;
            self.lines.push(Line::from(vec![
                Span::styled("  ◆ ", Style::default().fg(Color::Magenta)),
                Span::raw(item.title.clone()),
                Span::styled(
                    format!("  ({})", item.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        if shown == 0 {
            self.push(Line::from("  No projects in this category yet."));
        }
        self.blank();

        self.push(Line::from(Span::styled(
            "  What clients say",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (name, quote) in TESTIMONIALS {
            self.push(Line::from(vec![
                Span::styled(format!("  \"{quote}\""), Style::default().fg(Color::Gray)),
                Span::styled(format!("  {name}"), Style::default().fg(Color::DarkGray)),
            ]));
        }
        self.blank();
    }

    fn pricing(&mut self) {
        self.anchor("pricing");
        self.heading("Pricing");

        for plan in PLANS.iter() {
            let id = plan_element_id(plan.key);
            let style = self.reveal_style(&id);
            self.element(id);
            self.push(Line::from(vec![
                Span::styled(
                    format!("  {}", plan.name),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", plan.price), style.fg(Color::Yellow)),
            ]));
            for feature in plan.features {
                self.push(Line::from(vec![
                    Span::styled("    ✓ ", Style::default().fg(Color::Green)),
                    Span::styled(feature, style),
                ]));
            }
            let focused = self.is_focused(&Target::Plan(plan.key));
            self.push(Line::from(vec![
                Span::raw("  "),
                button("Subscribe", focused, false),
            ]));
            self.blank();
        }
    }

    fn faq(&mut self) {
        self.anchor("faq");
        self.heading("Frequently Asked Questions");

        let app = self.app;
        for entry in app.faq.entries() {
            let open = app.faq.is_open(&entry.id);
            let focused = self.is_focused(&Target::Question(entry.id.clone()));
            let marker = if open { "▾" } else { "▸" };
            let style = if focused {
                button_style(true, false)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            self.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{marker} {}", entry.question), style),
            ]));
            if open {
                self.push(Line::from(Span::styled(
                    format!("    {}", entry.answer),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        self.blank();
    }

    fn contact(&mut self) {
        self.anchor("contact");
        self.heading("Contact Us");

        let app = self.app;
        let form = &app.form;
        for field in Field::ALL {
            let editing = self.is_focused(&Target::Field(field));
            let label_style = if editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let cursor = if editing { "▏" } else { "" };
            self.lines.push(Line::from(vec![
                Span::styled(format!("  {:<8}", field.label()), label_style),
                Span::styled(
                    format!(" {}{cursor} ", form.value(field)),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]));
            if let Some(error) = form.error(field) {
                self.lines.push(Line::from(Span::styled(
                    format!("           {error}"),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        self.blank();

        let label = if form.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        };
        let focused = self.is_focused(&Target::Submit);
        self.push(Line::from(vec![Span::raw("  "), button(label, focused, false)]));
        self.blank();
        self.push(
            Line::from(Span::styled(
                format!("© {BRAND}. All rights reserved."),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
    }
}

/// Lay out the full page for the current app state
pub fn build_page(app: &App, now: Instant) -> (Vec<Line<'static>>, PageLayout) {
    let mut page = PageBuilder::new(app, now);
    page.home();
    page.services();
    page.portfolio();
    page.pricing();
    page.faq();
    page.contact();
    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::site::content::SECTIONS;

    #[test]
    fn anchors_follow_section_order() {
        let now = Instant::now();
        let app = App::new(Config::default(), now);
        let (lines, layout) = build_page(&app, now);

        let ids: Vec<&str> = layout.anchors.iter().map(|a| a.id.as_str()).collect();
        let expected: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, expected);
        assert!(layout.anchors.windows(2).all(|w| w[0].top < w[1].top));
        assert_eq!(usize::from(layout.height), lines.len());
    }

    #[test]
    fn stats_and_cards_are_tracked_elements() {
        let now = Instant::now();
        let app = App::new(Config::default(), now);
        let (_, layout) = build_page(&app, now);

        let ids: Vec<&str> = layout.elements.iter().map(|(id, _)| id.as_str()).collect();
        assert!(ids.contains(&"stat-0"));
        assert!(ids.contains(&"service-2"));
        assert!(ids.contains(&"plan-annual"));
    }

    #[test]
    fn opening_a_question_adds_its_answer() {
        let now = Instant::now();
        let mut app = App::new(Config::default(), now);
        let (_, closed) = build_page(&app, now);
        app.toggle_question("faq-cancel");
        let (_, open) = build_page(&app, now);
        assert_eq!(open.height, closed.height + 1);
    }

    #[test]
    fn filter_labels() {
        assert_eq!(filter_label("all"), "All Projects");
        assert_eq!(filter_label("print"), "Print");
    }
}
