use super::rules::classify;
use super::types::Browser;

/// Input name under which the browser family is reported.
pub const BROWSER_INPUT: &str = "browser";

/// Host-side channel that receives named input values for a session
/// (e.g. a web framework's server-side input state).
pub trait InputSink {
    fn set_input_value(&mut self, name: &str, value: &str);
}

impl<F> InputSink for F
where
    F: FnMut(&str, &str),
{
    fn set_input_value(&mut self, name: &str, value: &str) {
        self(name, value)
    }
}

/// Session-initialisation hook: classify `user_agent` and report the label
/// to `sink` under [`BROWSER_INPUT`]. Returns the reported family.
pub fn on_session_initialized<S>(sink: &mut S, user_agent: &str) -> Browser
where
    S: InputSink + ?Sized,
{
    let browser = classify(user_agent);
    tracing::debug!(%browser, "reporting browser family on session init");
    sink.set_input_value(BROWSER_INPUT, browser.as_str());
    browser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(String, String)>);

    impl InputSink for Recorder {
        fn set_input_value(&mut self, name: &str, value: &str) {
            self.0.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn reports_once_under_browser_key() {
        let mut rec = Recorder::default();
        let b = on_session_initialized(&mut rec, "Mozilla/5.0 ... Firefox/115.0");
        assert_eq!(b, Browser::Firefox);
        assert_eq!(rec.0, vec![("browser".to_string(), "Firefox".to_string())]);
    }

    #[test]
    fn reports_unknown_for_empty_agent() {
        let mut rec = Recorder::default();
        on_session_initialized(&mut rec, "");
        assert_eq!(rec.0[0].1, "unknown");
    }

    #[test]
    fn closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |name: &str, value: &str| seen.push(format!("{name}={value}"));
        on_session_initialized(&mut sink, "Chrome/115.0 Safari/537.36 Edg/115.0");
        assert_eq!(seen, ["browser=Edge"]);
    }
}
