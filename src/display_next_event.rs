use crate::caption::choose_caption;
use crate::{Element, Error, EventSummary, Gateway, GROUP_ATTRIBUTE};
use rand::Rng;
use tracing::{debug, warn};

/// What a call to [`Gateway::display_next_event`] did to the element.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The element now shows the next event.
    Rendered,
    /// The group has no upcoming event; the element is untouched.
    Skipped,
    /// The event could not be fetched; the element is untouched.
    Failed(Error),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }
}

/// Build the caption and event link shown inside the element.
pub fn render_html(caption: &str, event_base: &str, group: &str, event: &EventSummary) -> String {
    format!(
        "<span class=\"caption\">{}</span><a target=\"_blank\" href=\"{}/{}/events/{}\">{}</a>",
        escape(caption),
        escape(event_base),
        escape(group),
        escape(&event.id.to_string()),
        escape(&event.name)
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Gateway {
    /// Display the next event of the element's Meetup group inside the element.
    ///
    /// The group is read from the `data-meetup-group` attribute. When the group has an
    /// upcoming event, the element's content is replaced with a caption and a link to the
    /// event page, and the element is made fully opaque. Otherwise the element is left as it
    /// was. Errors are reported through the returned [`Outcome`] and never escape.
    pub async fn display_next_event<E: Element>(&self, el: &mut E) -> Outcome {
        let caption = crate::caption::random_caption();
        self.display_with_caption(el, caption).await
    }

    /// Same as [`Gateway::display_next_event`], drawing the caption from `rng`.
    pub async fn display_next_event_with_rng<E: Element, R: Rng + ?Sized>(
        &self,
        el: &mut E,
        rng: &mut R,
    ) -> Outcome {
        let caption = choose_caption(rng);
        self.display_with_caption(el, caption).await
    }

    async fn display_with_caption<E: Element>(&self, el: &mut E, caption: &str) -> Outcome {
        // A missing attribute yields the same request a browser script would make.
        let group = el
            .attribute(GROUP_ATTRIBUTE)
            .unwrap_or_else(|| String::from("undefined"));

        let event = match self.get_next_event(&group).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!(group = group.as_str(), "No upcoming event");
                return Outcome::Skipped;
            }
            Err(err) => {
                warn!(group = group.as_str(), error = %err, "Could not fetch next event");
                return Outcome::Failed(err);
            }
        };

        let html = render_html(caption, &self.config.event_base, &group, &event);
        el.set_inner_html(html);
        el.set_opacity(1.0);

        Outcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventId;

    fn event(id: EventId, name: &str) -> EventSummary {
        EventSummary {
            id,
            name: name.to_string(),
            time: None,
            utc_offset: None,
        }
    }

    #[test]
    fn renders_caption_and_link() {
        let html = render_html(
            "Next event:",
            "http://www.meetup.com",
            "testgroup",
            &event(EventId::Number(123), "Monthly Meetup"),
        );
        assert_eq!(
            html,
            "<span class=\"caption\">Next event:</span><a target=\"_blank\" href=\"http://www.meetup.com/testgroup/events/123\">Monthly Meetup</a>"
        );
    }

    #[test]
    fn escapes_markup_in_event_name() {
        let html = render_html(
            "Let's meetup at: ",
            "http://www.meetup.com",
            "rust",
            &event(EventId::Text("abc".to_string()), "<b>Rust & \"Friends\"</b>"),
        );
        assert!(html.starts_with("<span class=\"caption\">Let's meetup at: </span>"));
        assert!(html.ends_with(">&lt;b&gt;Rust &amp; &quot;Friends&quot;&lt;/b&gt;</a>"));
    }
}
