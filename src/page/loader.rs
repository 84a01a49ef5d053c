use super::{
    ActivitiesRegion, ActivityCard, ActivityOption, RosterEntry, SignupPage, LOAD_FAILED_TEXT,
};
use crate::api::ActivitiesApi;
use crate::config::Locale;
use crate::models::{initials, Catalog, NamedActivity};

/// Fetch the catalog and render it into `page`.
///
/// Both the activities region and the selector options are replaced as a
/// whole. On failure the activities region shows a fixed message, the
/// selector stays empty and the error is only logged.
pub async fn load(api: &ActivitiesApi, page: &mut SignupPage) {
    page.options.clear();

    match api.fetch_catalog().await {
        Ok(catalog) => render_catalog(page, &catalog),
        Err(e) => {
            log::error!("Error fetching activities: {e}");
            page.activities = ActivitiesRegion::Failed(LOAD_FAILED_TEXT.to_string());
        }
    }
}

/// Render an already fetched catalog, in delivered order.
pub fn render_catalog(page: &mut SignupPage, catalog: &Catalog) {
    let selected = page.form.activity.as_deref();

    let mut cards = Vec::with_capacity(catalog.len());
    let mut options = Vec::with_capacity(catalog.len());
    for named in catalog {
        cards.push(card(named, page.locale));
        options.push(ActivityOption {
            value: named.name.clone(),
            label: named.name.clone(),
            selected: selected == Some(named.name.as_str()),
        });
    }

    page.activities = ActivitiesRegion::Loaded(cards);
    page.options = options;
}

fn card(named: &NamedActivity, locale: Locale) -> ActivityCard {
    let activity = &named.activity;
    ActivityCard {
        name: named.name.clone(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        roster: roster(&activity.participants, locale),
    }
}

fn roster(participants: &[String], locale: Locale) -> Vec<RosterEntry> {
    if participants.is_empty() {
        return vec![RosterEntry::Placeholder(locale.no_participants().to_string())];
    }
    participants
        .iter()
        .map(|p| RosterEntry::Participant {
            initials: initials(p),
            label: p.clone(),
        })
        .collect()
}
