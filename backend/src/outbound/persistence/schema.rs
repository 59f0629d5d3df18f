//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email_address` carries a unique constraint; `password_digest` stores
    /// the hex-encoded SHA-256 digest and never leaves this layer unmapped.
    users (id) {
        /// Primary key: serial integer identifier.
        id -> Int4,
        /// Given name shown in owner projections.
        first_name -> Varchar,
        /// Family name shown in owner projections.
        last_name -> Varchar,
        /// Unique login email address.
        email_address -> Varchar,
        /// Hex-encoded SHA-256 password digest.
        password_digest -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Courses owned by users.
    ///
    /// There is deliberately no uniqueness constraint across the content
    /// columns: creation deduplicates on the full field tuple at query time.
    courses (id) {
        /// Primary key: serial integer identifier.
        id -> Int4,
        /// Course title; never empty in persisted state.
        title -> Varchar,
        /// Course description; never empty in persisted state.
        description -> Text,
        /// Optional free-form time estimate.
        estimated_time -> Nullable<Varchar>,
        /// Optional free-form materials list.
        materials_needed -> Nullable<Varchar>,
        /// Owning user; immutable after creation.
        user_id -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(courses -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(courses, users);
