//! `define_port_error!`: declares a port error enum whose variants each carry
//! a free-form `message`.
//!
//! Each variant is written as `Variant => "summary"`. The macro expands to a
//! `thiserror` enum rendering as `"<summary>: <message>"`, a snake_case
//! constructor per variant accepting anything convertible into `String`, and a
//! [`message`](#method.message) accessor shared by all variants.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {message}", $summary)]
                $variant { message: String },
            )+
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Build a [`", stringify!($name), "::", stringify!($variant), "`] error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                )+
            }

            /// Adapter-supplied detail, without the variant summary.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message })|+ => message,
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::ports::UserPersistenceError;
    use rstest::rstest;

    define_port_error! {
        pub enum LookupError {
            NameTaken => "nombre already registered",
        }
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("pool exhausted"),
        "user repository connection failed: pool exhausted"
    )]
    #[case(
        UserPersistenceError::query(String::from("relation \"usuarios\" does not exist")),
        "user repository query failed: relation \"usuarios\" does not exist"
    )]
    fn display_prefixes_variant_summary(#[case] error: UserPersistenceError, #[case] rendered: &str) {
        assert_eq!(error.to_string(), rendered);
    }

    #[rstest]
    fn constructors_fill_the_message_field() {
        assert_eq!(
            UserPersistenceError::query("database error"),
            UserPersistenceError::Query {
                message: "database error".to_owned()
            }
        );
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), "refused")]
    #[case(UserPersistenceError::query("timeout"), "timeout")]
    fn message_strips_the_summary(#[case] error: UserPersistenceError, #[case] detail: &str) {
        assert_eq!(error.message(), detail);
    }

    #[rstest]
    fn single_variant_enums_expand() {
        let error = LookupError::name_taken("Ana");

        assert_eq!(error.message(), "Ana");
        assert_eq!(error.to_string(), "nombre already registered: Ana");
    }
}
