/// Representation formats the widget collection can be rendered in.
///
/// Declaration order is preference order: when the client rates both
/// formats equally, HTML wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    const HTML: (&'static str, &'static str) = ("text", "html");
    const JSON: (&'static str, &'static str) = ("application", "json");

    /// Resolve the format to serve from an `Accept` header value.
    pub fn from_accept(accept: Option<&str>) -> Format {
        let ranges = match accept {
            Some(accept) => parse_accept(accept),
            None => return Format::Html,
        };
        let html = quality(&ranges, Self::HTML);
        let json = quality(&ranges, Self::JSON);
        if json > html {
            Format::Json
        } else {
            Format::Html
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Json => "application/json",
        }
    }
}

/// Does a `Content-Type` header name a form-encoded body?
///
/// Parameters such as `charset` are ignored and the comparison is
/// case-insensitive.
pub fn is_form_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| essence(ct).eq_ignore_ascii_case("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

fn essence(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or("").trim()
}

#[derive(Debug, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    q: f32,
}

impl MediaRange {
    /// How specifically this range matches, or `None` if it doesn't.
    fn specificity(&self, (kind, subtype): (&str, &str)) -> Option<u8> {
        match (self.kind.as_str(), self.subtype.as_str()) {
            ("*", "*") => Some(0),
            (k, "*") if k == kind => Some(1),
            (k, s) if k == kind && s == subtype => Some(2),
            _ => None,
        }
    }
}

fn parse_accept(accept: &str) -> Vec<MediaRange> {
    accept.split(',').filter_map(parse_range).collect()
}

fn parse_range(range: &str) -> Option<MediaRange> {
    let mut parts = range.split(';');
    let media = parts.next()?.trim().to_ascii_lowercase();
    let (kind, subtype) = media.split_once('/')?;
    if kind.is_empty() || subtype.is_empty() {
        return None;
    }

    let mut q = 1.0;
    for param in parts {
        if let Some((key, value)) = param.split_once('=') {
            if key.trim().eq_ignore_ascii_case("q") {
                q = value.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
            }
        }
    }

    Some(MediaRange {
        kind: kind.to_owned(),
        subtype: subtype.to_owned(),
        q,
    })
}

/// Quality of the most specific range matching `media`, 0 if none match.
fn quality(ranges: &[MediaRange], media: (&str, &str)) -> f32 {
    ranges
        .iter()
        .filter_map(|range| range.specificity(media).map(|s| (s, range.q)))
        .max_by_key(|(s, _)| *s)
        .map(|(_, q)| q)
        .unwrap_or(0.0)
}
