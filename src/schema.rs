use diesel::table;

table! {
    austrian_translations (id) {
        id -> Integer,
        austrian -> Text,
        lookup_key -> Text,
        german -> Text,
        description -> Nullable<Text>,
        added_by -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}
