use chrono::{NaiveDate, TimeZone, Utc};
use impactsphere::{
    Dashboard, DataEntryForm, Kpi, PeriodUnit, Tracker, View, entry::FormField,
    router::ShareData,
};

#[test]
fn rejected_submission_leaves_session_untouched() {
    let mut session = Dashboard::new();
    session.navigate(View::from_name("Data Entry"));

    let mut form = DataEntryForm::new();
    form.set_kpi(Kpi::RenewableEnergyMix, "140");
    let err = form.submit().unwrap_err();
    assert!(err.message_for(FormField::BusinessName).is_some());
    assert!(err.message_for(FormField::Kpi(Kpi::RenewableEnergyMix)).is_some());

    assert_eq!(session.active_view(), View::DataEntry);
    assert!(session.sustainability_data().is_none());
}

#[test]
fn month_period_is_calendar_based() {
    let mut form = DataEntryForm::new();
    form.set_business_name("Acme").set_period("1", PeriodUnit::Months);
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let data = form.submit_at(now).unwrap();
    assert_eq!(data.time_frame_start, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(data.time_frame_end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());

    let mut session = Dashboard::new();
    session.submit_data(data);
    assert_eq!(session.active_view(), View::Reporting);
}

#[test]
fn trackers_and_share_payload() {
    let mut habits = Tracker::habits();
    assert!(habits.toggle(1));
    assert!(habits.toggle(5));
    assert_eq!(habits.completed_count(), 2);
    assert!((habits.progress_percentage() - 40.0).abs() < 1e-9);

    let share = ShareData::IMPACTSPHERE;
    assert_eq!(share.title, "ImpactSphere: ESG Intelligence Platform");
    assert_eq!(share.url, "https://myherb.co.il/impactsphere");
}
