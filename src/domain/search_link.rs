use url::Url;

const REDIRECT_PARAM: &str = "uddg";

/// Unwraps duckduckgo redirect links. Result anchors sometimes point at the
/// engine's own redirect endpoint (`//duckduckgo.com/l/?uddg=...`) with the
/// real destination percent-encoded in the `uddg` parameter.
pub fn resolve_destination_url(link: &str) -> String {
    match link.starts_with("//") {
        true => match Url::parse(&format!("https:{}", link)) {
            Ok(parsed) => {
                let destination = parsed
                    .query_pairs()
                    .find(|(key, _)| key == REDIRECT_PARAM)
                    .map(|(_, value)| value.into_owned());

                match destination {
                    Some(destination) => destination,
                    None => parsed.to_string(),
                }
            }
            Err(_) => link.to_string(),
        },
        false => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_destination_url;

    #[test]
    fn redirect_link_resolves_to_encoded_destination() {
        let link =
            "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.acme.com%2Fabout&rut=a1b2c3d4e5f6";
        let result = resolve_destination_url(link);

        assert_eq!(result, "https://www.acme.com/about");
    }

    #[test]
    fn redirect_link_without_parameter_resolves_to_absolute_url() {
        let link = "//duckduckgo.com/l/?rut=a1b2c3d4e5f6";
        let result = resolve_destination_url(link);

        assert_eq!(result, "https://duckduckgo.com/l/?rut=a1b2c3d4e5f6");
    }

    #[test]
    fn plain_absolute_link_passes_through() {
        let link = "https://www.acme.com/contact";
        let result = resolve_destination_url(link);

        assert_eq!(result, link);
    }

    #[test]
    fn relative_link_passes_through() {
        let link = "/html/?q=acme+corp";
        let result = resolve_destination_url(link);

        assert_eq!(result, link);
    }
}
