//! Member admin walkthrough over the in-memory backend

use chrono::{Duration, Local};
use gymdesk::prelude::*;
use gymdesk::reports::renewals;

fn seed_member(id: EntityId, name: &str, plan_type: PlanType, days_left: i64) -> Member {
    let today = Local::now().date_naive();
    Member {
        id,
        name: name.to_string(),
        phone: format!("98400{:05}", id),
        email: None,
        plan_type,
        start_date: today - Duration::days(30),
        end_date: today + Duration::days(days_left),
        notes: None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::default().with_env_overrides()?;
    gymdesk::logging::init_from_config(&config);
    println!("🏋️ gymdesk member admin\n");

    let backend = InMemoryCollection::seeded(vec![
        seed_member(1, "Alice", PlanType::Basic, 120),
        seed_member(2, "Bob", PlanType::Premium, 3),
        seed_member(3, "Carol", PlanType::Standard, -4),
        seed_member(4, "Dave", PlanType::Basic, 0),
    ]);
    let notices = Arc::new(NoticeQueue::new());
    let mut members: ListSession<Member> =
        ListSession::from_config(Arc::new(backend.clone()), notices.clone(), &config);

    let count = members.mount().await?;
    println!("📋 Loaded {} members", count);

    members.set_filter(Some(PlanType::Basic.as_str()));
    let page = members.visible();
    println!("🔎 Basic plan: {} match(es)", page.meta.total);
    for member in &page.items {
        println!("   - {} ({})", member.name, member.phone);
    }
    members.clear_filters();

    // Add a member through the modal
    members.open_add()?;
    if let Some(draft) = members.draft_mut() {
        draft.name = "Eve".to_string();
        draft.phone = "9840011111".to_string();
        draft.plan_type = PlanType::Premium;
        draft.start_date = Some(Local::now().date_naive());
        draft.end_date = Some(Local::now().date_naive() + Duration::days(90));
    }
    let eve = members.submit().await?;
    println!("✅ Added {} with id {}", eve.name, eve.id);

    // Rename Bob
    members.open_edit(2)?;
    if let Some(draft) = members.draft_mut() {
        draft.name = "Bobby".to_string();
    }
    members.submit().await?;

    // Delete Carol after confirming
    let confirm = |prompt: &str| {
        println!("❓ {} yes", prompt);
        true
    };
    members.delete(3, &confirm).await?;

    for notice in notices.drain() {
        println!("🔔 {}", notice.message);
    }

    let today = Local::now().date_naive();
    let window = config.renewal_window_days;
    println!("\n📅 Renewals within {} days:", window);
    for reminder in renewals::reminders(members.store().entities(), today, window)? {
        println!("   - {} in {} day(s)", reminder.name, reminder.days_left);
        renewals::send_reminder(&reminder);
    }

    let stats =
        DashboardStats::compute_with_window(members.store().entities(), &[], today, window);
    println!(
        "\n📊 {} members, {} active, {} expiring soon",
        stats.total_members, stats.active_members, stats.upcoming_renewals
    );

    Ok(())
}
