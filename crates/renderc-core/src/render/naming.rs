//! Identifiers the templates derive from schema names

use heck::ToUpperCamelCase;

use crate::model::{App, Span};

impl Span {
    /// `UpperCamel(name) + "SpanBase"`, the user-extensible base class
    pub fn base_class_name(&self) -> String {
        format!("{}SpanBase", self.name.to_upper_camel_case())
    }

    pub fn class_type_name(&self) -> String {
        format!("{}_type", self.name)
    }

    pub fn instance_name(&self) -> String {
        format!("{}__instance", self.name)
    }

    pub fn fixed_hash_name(&self) -> String {
        format!("{}__hash", self.name)
    }

    pub fn fixed_hash_type_name(&self) -> String {
        format!("{}__hash_t", self.name)
    }

    pub fn fixed_hash_hasher_name(&self) -> String {
        format!("{}__hasher_t", self.name)
    }
}

impl App {
    pub fn hash_name(&self) -> String {
        format!("{}_hash", self.name)
    }

    pub fn hash_functor(&self) -> String {
        format!("{}_hasher_t", self.name)
    }

    /// Upper-cased hash name with a `_SIZE` suffix
    pub fn hash_size(&self) -> String {
        format!("{}_SIZE", self.hash_name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{App, AppId, Span};

    #[test]
    fn test_span_names() {
        let span = Span::new(AppId(0), "tcp_socket");

        assert_eq!(span.base_class_name(), "TcpSocketSpanBase");
        assert_eq!(span.class_type_name(), "tcp_socket_type");
        assert_eq!(span.instance_name(), "tcp_socket__instance");
        assert_eq!(span.fixed_hash_name(), "tcp_socket__hash");
        assert_eq!(span.fixed_hash_type_name(), "tcp_socket__hash_t");
        assert_eq!(span.fixed_hash_hasher_name(), "tcp_socket__hasher_t");
    }

    #[test]
    fn test_app_hash_names() {
        let app = App::new("ingest");

        assert_eq!(app.hash_name(), "ingest_hash");
        assert_eq!(app.hash_functor(), "ingest_hasher_t");
        assert_eq!(app.hash_size(), "INGEST_HASH_SIZE");
    }
}
