//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous = "";

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else if index == 1 && previous == "s" {
            normalised.push_str("{short_link}");
        } else {
            normalised.push_str(segment);
        }

        previous = segment;
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let names = request_span_name(
            "POST",
            "/recipes/0190f2a4-7d2c-7a51-9a3e-3b1f2c4d5e6f/favorite",
        );

        assert_eq!(names.otel_path, "/recipes/{uuid}/favorite");
        assert_eq!(names.otel_span_name, "POST /recipes/{uuid}/favorite");
    }

    #[test]
    fn short_link_tokens_are_collapsed() {
        assert_eq!(normalise_path_for_span_name("/s/ab12cd"), "/s/{short_link}");
        assert_eq!(normalise_path_for_span_name("/recipes/s"), "/recipes/s");
    }

    #[test]
    fn root_path_is_kept() {
        assert_eq!(normalise_path_for_span_name("/"), "/");
    }
}
