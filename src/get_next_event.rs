use crate::{jsonp, Error, EventSummary, Gateway};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Deserialize)]
struct Group {
    #[serde(default)]
    next_event: Option<EventSummary>,
}

impl Gateway {
    pub fn next_event_url(&self, group: &str) -> String {
        //https://api.meetup.com/testgroup?photo-host=public&sig_id=44948372&only=next_event&sig=...

        // NOTE: The group is substituted as given; Meetup group names are URL-safe.
        format!(
            "{}/{}?photo-host=public&sig_id={}&only=next_event&sig={}",
            self.config.api_base, group, self.config.credentials.sig_id, self.config.credentials.sig
        )
    }

    /// Fetch the next scheduled event of `group`, or `None` if nothing is scheduled.
    pub async fn get_next_event(&self, group: &str) -> Result<Option<EventSummary>, Error> {
        let url = self.next_event_url(group);
        debug!(url = url.as_str(), "Requesting next event");

        let text = self.get_without_retry(&url).await?;
        decode_next_event(&text)
    }
}

// JSONP responses wrap the group as `{"meta": ..., "data": {...}}`, plain GETs return it bare.
fn decode_next_event(text: &str) -> Result<Option<EventSummary>, Error> {
    let serialization_error = |err: serde_json::Error| {
        Error::SerializationError(format!(
            "Could not deserialize response from \"{}\" ({}).",
            text, err
        ))
    };

    let body: Value = serde_json::from_str(jsonp::strip_padding(text)).map_err(serialization_error)?;

    let group = match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        _ => {
            return Err(Error::SerializationError(format!(
                "Expected a JSON object in response \"{}\".",
                text
            )))
        }
    };

    let group: Group = serde_json::from_value(group).map_err(serialization_error)?;
    Ok(group.next_event)
}
