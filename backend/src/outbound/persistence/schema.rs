//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `username` carries a unique index.
    users (id) {
        id -> Int8,
        username -> Varchar,
        /// PHC-formatted password hash.
        password -> Varchar,
    }
}

diesel::table! {
    /// Book catalogue. `bookname` carries a unique index.
    books (id) {
        id -> Int8,
        bookname -> Varchar,
        /// Owning user id; not a foreign key.
        userid -> Int8,
        /// Wall-clock creation time, `YYYY-MM-DD HH:MM:SS`.
        createtime -> Varchar,
        bookstatus -> Int2,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, books);
