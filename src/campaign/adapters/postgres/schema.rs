//! Diesel schema for campaign persistence.

diesel::table! {
    /// Campaign records, one row per campaign including soft-deleted ones.
    campaigns (id) {
        /// Campaign identifier.
        id -> Uuid,
        /// Owning actor.
        owner_id -> Int8,
        /// Campaign title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Fundraising goal in minor units.
        target_amount -> Int8,
        /// Amount collected so far, maintained outside this service.
        collected_amount -> Int8,
        /// Smallest accepted donation in minor units.
        min_donation -> Int8,
        /// Fundraising deadline.
        deadline -> Timestamptz,
        /// Persisted lifecycle status.
        #[max_length = 32]
        status -> Varchar,
        /// Persisted category.
        #[max_length = 32]
        category -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}
