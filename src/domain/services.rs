use crate::domain::model::{Attachment, RawFields, RawRecord, SocialPlatform, TeamMember};
use std::collections::BTreeMap;

/// Maps one source record onto the fixed `TeamMember` shape.
pub fn normalize_record(record: RawRecord) -> TeamMember {
    let RawRecord { id, fields, .. } = record;

    let image = fields
        .photo
        .as_deref()
        .map(select_image)
        .unwrap_or_default();
    let social = social_links(&fields);
    let name = fields.name.unwrap_or_default();

    TeamMember {
        id,
        image_alt: name.clone(),
        name,
        bio: fields.bio.unwrap_or_default(),
        image,
        social,
    }
}

pub fn normalize_records(records: Vec<RawRecord>) -> Vec<TeamMember> {
    records.into_iter().map(normalize_record).collect()
}

/// Large thumbnail of the first attachment, then its original url.
pub fn select_image(photos: &[Attachment]) -> String {
    let Some(photo) = photos.first() else {
        return String::new();
    };

    photo
        .thumbnails
        .as_ref()
        .and_then(|thumbnails| thumbnails.large.as_ref())
        .map(|large| large.url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or(photo.url.as_str())
        .to_string()
}

pub fn social_links(fields: &RawFields) -> BTreeMap<SocialPlatform, String> {
    SocialPlatform::ALL
        .iter()
        .filter_map(|platform| {
            fields
                .social(*platform)
                .filter(|value| !value.is_empty())
                .map(|value| (*platform, value.to_string()))
        })
        .collect()
}
