//! Implements InputPort. Inquire-based dashboard menus.
//!
//! The summary header is redrawn only after a store topic it depends on fired.

use super::render;
use crate::domain::{
    Catalog, DomainError, Goal, HighSchoolInteraction, HighSchoolPartner, Meeting, MeetingType,
    Member, MemberCategory, MemberStatus,
};
use crate::ports::InputPort;
use crate::shared::text::short_date;
use crate::state::{StateStore, SubscriptionId, Topic};
use crate::usecases::{
    DataLoader, DateFilterService, DateRangeTarget, GoalService, InteractionForm, MeetingForm,
    MeetingService, MemberForm, MemberPool, MemberService, OutreachService, PartnerForm,
    TacticSelection,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::error::InquireResult;
use inquire::ui::{Color as PromptColor, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, CustomType, InquireError, MultiSelect, Select, Text};
use std::cell::Cell;
use std::fmt;
use std::io::stdout;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

/// Topics that change what the summary header shows.
const SUMMARY_TOPICS: [Topic; 6] = [
    Topic::BoardMembers,
    Topic::SpecialSessionMembers,
    Topic::PriorityGoals,
    Topic::Meetings,
    Topic::VolunteerHoursDateRange,
    Topic::CurrentDepartment,
];

const TEAL: PromptColor = PromptColor::Rgb {
    r: 0x2e,
    g: 0xc4,
    b: 0xb6,
};

/// Teal prompt theme for every inquire prompt that follows.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(TEAL))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(TEAL))
        .with_answer(StyleSheet::new().with_fg(TEAL));
    inquire::set_global_render_config(config);
}

/// Esc maps to `None`, Ctrl-C to `DomainError::Cancelled`.
fn ask<T>(result: InquireResult<T>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(DomainError::Cancelled),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn print_colored(text: &str, color: Color) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
}

fn alert(err: &DomainError) {
    print_colored(&err.to_string(), Color::Red);
}

fn notice(text: &str) {
    print_colored(text, Color::Green);
}

/// Select option carrying a record id.
struct Choice {
    id: String,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenu {
    Department,
    BoardMembers,
    SpecialSessionMembers,
    Tactics,
    Meetings,
    Partners,
    Interactions,
    VolunteerHours,
    ClearData,
    Quit,
}

impl MainMenu {
    const ALL: [MainMenu; 10] = [
        MainMenu::Department,
        MainMenu::BoardMembers,
        MainMenu::SpecialSessionMembers,
        MainMenu::Tactics,
        MainMenu::Meetings,
        MainMenu::Partners,
        MainMenu::Interactions,
        MainMenu::VolunteerHours,
        MainMenu::ClearData,
        MainMenu::Quit,
    ];
}

impl fmt::Display for MainMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Department => "Switch department",
            Self::BoardMembers => "Board members",
            Self::SpecialSessionMembers => "Special session members",
            Self::Tactics => "Priority tactics",
            Self::Meetings => "Meetings",
            Self::Partners => "High school partners",
            Self::Interactions => "High school interactions",
            Self::VolunteerHours => "Volunteer hours range",
            Self::ClearData => "Clear all data",
            Self::Quit => "Quit",
        })
    }
}

/// Actions shared by the list submenus. Not every submenu offers every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Edit,
    Delete,
    RemovePhoto,
    SelectYear,
    FilterDates,
    ResetFilter,
    Back,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "List",
            Self::Add => "Add",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::RemovePhoto => "Remove profile photo",
            Self::SelectYear => "Select year",
            Self::FilterDates => "Set date range",
            Self::ResetFilter => "Reset date range",
            Self::Back => "Back",
        })
    }
}

/// TUI adapter. Inquire prompts over the dashboard use cases.
pub struct TuiInputPort {
    store: Rc<StateStore>,
    catalog: Rc<Catalog>,
    loader: DataLoader,
    members: MemberService,
    goals: GoalService,
    meetings: MeetingService,
    outreach: OutreachService,
    meetings_filter: DateFilterService,
    hours_filter: DateFilterService,
    tactic_words: usize,
    summary_stale: Rc<Cell<bool>>,
    subscriptions: Vec<SubscriptionId>,
}

impl TuiInputPort {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Rc<StateStore>,
        catalog: Rc<Catalog>,
        loader: DataLoader,
        members: MemberService,
        goals: GoalService,
        meetings: MeetingService,
        outreach: OutreachService,
        tactic_words: usize,
    ) -> Self {
        let summary_stale = Rc::new(Cell::new(true));
        let subscriptions = SUMMARY_TOPICS
            .iter()
            .map(|&topic| {
                let stale = Rc::clone(&summary_stale);
                store.subscribe(topic, move || stale.set(true))
            })
            .collect();
        let meetings_filter = DateFilterService::new(Rc::clone(&store), DateRangeTarget::Meetings);
        let hours_filter =
            DateFilterService::new(Rc::clone(&store), DateRangeTarget::VolunteerHours);
        Self {
            meetings_filter,
            hours_filter,
            store,
            catalog,
            loader,
            members,
            goals,
            meetings,
            outreach,
            tactic_words,
            summary_stale,
            subscriptions,
        }
    }

    fn print_summary(&self) {
        let department = self
            .store
            .current_department()
            .map(|id| {
                self.catalog
                    .department(&id)
                    .map(|d| d.name.clone())
                    .unwrap_or(id)
            })
            .unwrap_or_else(|| "No department".to_string());
        let text = render::summary(
            &department,
            &self.store.summary(),
            &self.hours_filter.label(),
        );
        println!();
        print_colored(&text, Color::Cyan);
    }

    async fn dispatch(&self, item: MainMenu) -> Result<(), DomainError> {
        match item {
            MainMenu::Department => self.switch_department(),
            MainMenu::BoardMembers => self.members_menu(MemberPool::Board).await,
            MainMenu::SpecialSessionMembers => {
                self.members_menu(MemberPool::SpecialSession).await
            }
            MainMenu::Tactics => self.tactics_menu(),
            MainMenu::Meetings => self.meetings_menu(),
            MainMenu::Partners => self.partners_menu(),
            MainMenu::Interactions => self.interactions_menu(),
            MainMenu::VolunteerHours => self.range_menu(&self.hours_filter),
            MainMenu::ClearData => self.clear_data(),
            MainMenu::Quit => Ok(()),
        }
    }

    fn action(&self, title: &str, actions: &[Action]) -> Result<Action, DomainError> {
        Ok(ask(Select::new(title, actions.to_vec()).prompt())?.unwrap_or(Action::Back))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Department
    // ─────────────────────────────────────────────────────────────────────────

    fn switch_department(&self) -> Result<(), DomainError> {
        let choices: Vec<Choice> = self
            .catalog
            .departments
            .iter()
            .map(|d| Choice {
                id: d.id.clone(),
                label: d.name.clone(),
            })
            .collect();
        let Some(choice) = ask(Select::new("Department:", choices).prompt())? else {
            return Ok(());
        };
        let stats = self.loader.load_department(&choice.id)?;
        notice(&format!(
            "Loaded {}: {} members, {} tactics, {} meetings",
            choice.label, stats.members, stats.goals, stats.meetings
        ));
        Ok(())
    }

    fn clear_data(&self) -> Result<(), DomainError> {
        let confirmed = ask(
            Confirm::new("Remove all members, tactics, meetings and outreach records?")
                .with_default(false)
                .prompt(),
        )?
        .unwrap_or(false);
        if confirmed {
            self.loader.clear();
            notice("All data cleared.");
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Members
    // ─────────────────────────────────────────────────────────────────────────

    async fn members_menu(&self, pool: MemberPool) -> Result<(), DomainError> {
        let title = match pool {
            MemberPool::Board => "Board members:",
            MemberPool::SpecialSession => "Special session members:",
        };
        let actions = [
            Action::List,
            Action::Add,
            Action::Edit,
            Action::RemovePhoto,
            Action::Delete,
            Action::Back,
        ];
        loop {
            let result = match self.action(title, &actions)? {
                Action::List => {
                    list(&self.members.members(pool), "No members yet.", render::member_line);
                    Ok(())
                }
                Action::Add => self.add_member(pool).await,
                Action::Edit => self.edit_member(pool).await,
                Action::RemovePhoto => match self.pick_member(pool) {
                    Ok(Some(member)) => self.members.remove_profile_image(pool, &member.id),
                    Ok(None) => Ok(()),
                    Err(e) => Err(e),
                },
                Action::Delete => self.delete_member(pool),
                _ => return Ok(()),
            };
            report(result)?;
        }
    }

    fn pick_member(&self, pool: MemberPool) -> Result<Option<Member>, DomainError> {
        let members = self.members.members(pool);
        let choices = members
            .iter()
            .map(|m| Choice {
                id: m.id.clone(),
                label: render::member_line(m),
            })
            .collect();
        pick(choices, "Member:", &members, |m| &m.id)
    }

    async fn add_member(&self, pool: MemberPool) -> Result<(), DomainError> {
        self.members.ensure_capacity(pool)?;
        let Some(form) = self.member_form(pool, None).await? else {
            return Ok(());
        };
        let member = self
            .members
            .add_member(pool, form)
            .inspect_err(|_| self.members.discard_pending_image())?;
        notice(&format!("Added {}.", member.name));
        Ok(())
    }

    async fn edit_member(&self, pool: MemberPool) -> Result<(), DomainError> {
        let Some(member) = self.pick_member(pool)? else {
            return Ok(());
        };
        let Some(form) = self.member_form(pool, Some(&member)).await? else {
            return Ok(());
        };
        self.members
            .update_member(pool, &member.id, form)
            .inspect_err(|_| self.members.discard_pending_image())?;
        notice(&format!("Updated {}.", member.name));
        Ok(())
    }

    fn delete_member(&self, pool: MemberPool) -> Result<(), DomainError> {
        let Some(member) = self.pick_member(pool)? else {
            return Ok(());
        };
        if confirm(&format!("Delete {}?", member.name))? {
            self.members.delete_member(pool, &member.id)?;
        }
        Ok(())
    }

    /// Prompts for every member field. An image path, if given, is read before returning.
    async fn member_form(
        &self,
        pool: MemberPool,
        current: Option<&Member>,
    ) -> Result<Option<MemberForm>, DomainError> {
        let field = |label: &str, value: fn(&Member) -> &str| {
            text(label, current.map(value).unwrap_or_default())
        };
        let Some(name) = field("Name:", |m| &m.name)? else {
            return Ok(None);
        };
        let Some(organization) = field("Organization:", |m| &m.organization)? else {
            return Ok(None);
        };
        let Some(title) = field("Title:", |m| &m.title)? else {
            return Ok(None);
        };
        let Some(email) = field("Email:", |m| &m.email)? else {
            return Ok(None);
        };
        let Some(phone) = field("Phone:", |m| &m.phone)? else {
            return Ok(None);
        };
        let categories = MemberCategory::ALL.to_vec();
        let start = current
            .and_then(|m| categories.iter().position(|c| *c == m.category))
            .unwrap_or(0);
        let Some(category) = ask(
            Select::new("Category:", categories)
                .with_starting_cursor(start)
                .prompt(),
        )?
        else {
            return Ok(None);
        };
        let status = match pool {
            MemberPool::Board => {
                let statuses = vec![MemberStatus::Core, MemberStatus::NonCore];
                let non_core = current.is_some_and(|m| m.status == MemberStatus::NonCore);
                let start = usize::from(non_core);
                let Some(status) = ask(
                    Select::new("Status:", statuses)
                        .with_starting_cursor(start)
                        .prompt(),
                )?
                else {
                    return Ok(None);
                };
                status
            }
            MemberPool::SpecialSession => MemberStatus::SpecialSession,
        };
        let Some(expertise) = field("Expertise:", |m| &m.expertise)? else {
            return Ok(None);
        };
        let Some(image_path) = text("Profile image path (blank to skip):", "")? else {
            return Ok(None);
        };
        if !image_path.trim().is_empty() {
            if let Err(e) = self
                .members
                .attach_profile_image(Path::new(image_path.trim()))
                .await
            {
                alert(&e);
            }
        }
        Ok(Some(MemberForm {
            name,
            organization,
            title,
            email,
            phone,
            category,
            status,
            expertise,
        }))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Priority tactics
    // ─────────────────────────────────────────────────────────────────────────

    fn tactics_menu(&self) -> Result<(), DomainError> {
        let actions = [
            Action::List,
            Action::SelectYear,
            Action::Add,
            Action::Delete,
            Action::Back,
        ];
        loop {
            let title = format!("Priority tactics ({}):", self.store.selected_tactic_year());
            let result = match self.action(&title, &actions)? {
                Action::List => {
                    let words = self.tactic_words;
                    list(&self.store.priority_goals(), "No priority tactics yet.", |g| {
                        render::goal_line(g, words)
                    });
                    Ok(())
                }
                Action::SelectYear => self.select_year(),
                Action::Add => self.add_tactic(),
                Action::Delete => self.remove_tactic(),
                _ => return Ok(()),
            };
            report(result)?;
        }
    }

    fn select_year(&self) -> Result<(), DomainError> {
        let years = self.goals.years();
        let start = years
            .iter()
            .position(|y| *y == self.store.selected_tactic_year())
            .unwrap_or(0);
        if let Some(year) = ask(
            Select::new("Tactic year:", years)
                .with_starting_cursor(start)
                .prompt(),
        )? {
            self.goals.select_year(year);
        }
        Ok(())
    }

    fn tactic_choices(&self, goals: &[Goal]) -> Vec<Choice> {
        goals
            .iter()
            .map(|g| Choice {
                id: g.id.clone(),
                label: render::goal_line(g, self.tactic_words),
            })
            .collect()
    }

    fn add_tactic(&self) -> Result<(), DomainError> {
        self.goals.ensure_capacity()?;
        let available = self.goals.available_tactics();
        if available.is_empty() {
            notice("Every tactic for this year is already prioritized.");
            return Ok(());
        }
        let Some(choice) = ask(Select::new("Tactic:", self.tactic_choices(&available)).prompt())?
        else {
            return Ok(());
        };
        self.goals.add_tactic(&choice.id)?;
        Ok(())
    }

    fn remove_tactic(&self) -> Result<(), DomainError> {
        let goals = self.store.priority_goals();
        let choices = self.tactic_choices(&goals);
        let Some(goal) = pick(choices, "Tactic:", &goals, |g| &g.id)? else {
            return Ok(());
        };
        self.goals.remove_tactic(&goal.id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Meetings
    // ─────────────────────────────────────────────────────────────────────────

    fn meetings_menu(&self) -> Result<(), DomainError> {
        let actions = [
            Action::List,
            Action::Add,
            Action::Edit,
            Action::Delete,
            Action::FilterDates,
            Action::ResetFilter,
            Action::Back,
        ];
        loop {
            let result = match self.action("Meetings:", &actions)? {
                Action::List => {
                    self.list_meetings();
                    Ok(())
                }
                Action::Add => self.schedule_meeting(None),
                Action::Edit => self.edit_meeting(),
                Action::Delete => self.delete_meeting(),
                Action::FilterDates => self.apply_range(&self.meetings_filter),
                Action::ResetFilter => {
                    self.meetings_filter.reset();
                    Ok(())
                }
                _ => return Ok(()),
            };
            report(result)?;
        }
    }

    fn list_meetings(&self) {
        let label = self.meetings_filter.label();
        if !label.is_empty() {
            println!("Showing {label}");
        }
        let groups = self.meetings.grouped_meetings();
        if groups.is_empty() {
            println!("No meetings recorded.");
            return;
        }
        let words = self.tactic_words;
        for (heading, meetings) in [
            ("Advisory Board Meetings", &groups.advisory_board),
            ("Special Sessions", &groups.special_sessions),
        ] {
            if meetings.is_empty() {
                continue;
            }
            println!("{heading}");
            for meeting in meetings {
                println!("  {}", render::meeting_block(meeting, words));
            }
        }
    }

    fn pick_meeting(&self) -> Result<Option<Meeting>, DomainError> {
        let meetings = self.store.meetings();
        let choices = meetings
            .iter()
            .map(|m| Choice {
                id: m.id.clone(),
                label: format!("{} {}", short_date(m.date), m.meeting_type.label()),
            })
            .collect();
        pick(choices, "Meeting:", &meetings, |m| &m.id)
    }

    fn edit_meeting(&self) -> Result<(), DomainError> {
        let Some(meeting) = self.pick_meeting()? else {
            return Ok(());
        };
        let prefill = self.meetings.start_edit(&meeting.id)?;
        self.schedule_meeting(Some(prefill))
    }

    fn delete_meeting(&self) -> Result<(), DomainError> {
        let Some(meeting) = self.pick_meeting()? else {
            return Ok(());
        };
        if confirm("Delete this meeting?")? {
            self.meetings.delete_meeting(&meeting.id)?;
        }
        Ok(())
    }

    /// Add when `prefill` is `None`, edit otherwise. Leaving the form releases the edit slot.
    fn schedule_meeting(&self, prefill: Option<MeetingForm>) -> Result<(), DomainError> {
        if prefill.is_none() {
            self.meetings.ensure_can_schedule()?;
        }
        let outcome = self
            .meeting_form(prefill.unwrap_or_default())
            .and_then(|form| match form {
                Some(form) => self.meetings.submit(form).map(Some),
                None => Ok(None),
            });
        match outcome {
            Ok(Some(id)) => {
                debug!(id = %id, "meeting saved from form");
                notice("Meeting saved.");
                Ok(())
            }
            Ok(None) => {
                self.meetings.cancel_edit();
                Ok(())
            }
            Err(e) => {
                self.meetings.cancel_edit();
                Err(e)
            }
        }
    }

    fn meeting_form(&self, prefill: MeetingForm) -> Result<Option<MeetingForm>, DomainError> {
        let types = vec![MeetingType::AdvisoryBoard, MeetingType::SpecialSession];
        let start = usize::from(prefill.meeting_type == Some(MeetingType::SpecialSession));
        let Some(meeting_type) = ask(
            Select::new("Meeting type:", types.iter().map(|t| t.label()).collect())
                .with_starting_cursor(start)
                .prompt(),
        )?
        .and_then(|label| types.into_iter().find(|t| t.label() == label)) else {
            return Ok(None);
        };

        let default_date = prefill.date.map(|d| d.to_string()).unwrap_or_default();
        let Some(date_input) = text("Date (YYYY-MM-DD):", &default_date)? else {
            return Ok(None);
        };
        let date = render::parse_optional_date(&date_input)?;

        let mut duration = CustomType::<f64>::new("Duration (hours):")
            .with_error_message("Enter a number of hours, e.g. 2.5");
        if prefill.duration > 0.0 {
            duration = duration.with_default(prefill.duration);
        }
        let Some(duration) = ask(duration.prompt())? else {
            return Ok(None);
        };

        let candidates = self.meetings.eligible_attendees(meeting_type);
        if !prefill.attendee_ids.is_empty() {
            let current: Vec<&str> = candidates
                .iter()
                .filter(|m| prefill.attendee_ids.contains(&m.id))
                .map(|m| m.name.as_str())
                .collect();
            println!("Currently attending: {}", current.join(", "));
        }
        let choices = candidates
            .iter()
            .map(|m| Choice {
                id: m.id.clone(),
                label: format!("{} ({})", m.name, m.organization),
            })
            .collect();
        let Some(attendees) = ask(MultiSelect::new("Attendees:", choices).prompt())? else {
            return Ok(None);
        };

        let goals = self.store.priority_goals();
        let tactic_prompt = MultiSelect::new("Tactics discussed:", self.tactic_choices(&goals));
        let Some(picked) = ask(tactic_prompt.prompt())? else {
            return Ok(None);
        };
        let mut tactics = Vec::with_capacity(picked.len());
        for choice in picked {
            let previous = prefill
                .tactics
                .iter()
                .find(|t| t.goal_id == choice.id)
                .map(|t| t.recommendations.as_str())
                .unwrap_or_default();
            let prompt = format!("Recommendations for {}:", choice.label);
            let Some(recommendations) = text(&prompt, previous)? else {
                return Ok(None);
            };
            tactics.push(TacticSelection {
                goal_id: choice.id,
                recommendations,
            });
        }

        Ok(Some(MeetingForm {
            meeting_type: Some(meeting_type),
            date,
            duration,
            attendee_ids: attendees.into_iter().map(|c| c.id).collect(),
            tactics,
        }))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Date ranges
    // ─────────────────────────────────────────────────────────────────────────

    fn range_menu(&self, filter: &DateFilterService) -> Result<(), DomainError> {
        let actions = [Action::FilterDates, Action::ResetFilter, Action::Back];
        let result = match self.action("Volunteer hours range:", &actions)? {
            Action::FilterDates => self.apply_range(filter),
            Action::ResetFilter => {
                filter.reset();
                Ok(())
            }
            _ => Ok(()),
        };
        report(result)
    }

    fn apply_range(&self, filter: &DateFilterService) -> Result<(), DomainError> {
        let current = filter.current();
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        let start_label = "Start date (YYYY-MM-DD, blank for open):";
        let Some(start) = text(start_label, &fmt(current.start_date))? else {
            return Ok(());
        };
        let end_label = "End date (YYYY-MM-DD, blank for open):";
        let Some(end) = text(end_label, &fmt(current.end_date))? else {
            return Ok(());
        };
        filter.apply(
            render::parse_optional_date(&start)?,
            render::parse_optional_date(&end)?,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // High school partners
    // ─────────────────────────────────────────────────────────────────────────

    fn partners_menu(&self) -> Result<(), DomainError> {
        let actions = [
            Action::List,
            Action::Add,
            Action::Edit,
            Action::Delete,
            Action::Back,
        ];
        loop {
            let result = match self.action("High school partners:", &actions)? {
                Action::List => {
                    list(
                        &self.store.high_school_partners(),
                        "No partners yet.",
                        render::partner_line,
                    );
                    Ok(())
                }
                Action::Add => self.add_partner(),
                Action::Edit => self.edit_partner(),
                Action::Delete => self.delete_partner(),
                _ => return Ok(()),
            };
            report(result)?;
        }
    }

    fn pick_partner(&self) -> Result<Option<HighSchoolPartner>, DomainError> {
        let partners = self.store.high_school_partners();
        let choices = partners
            .iter()
            .map(|p| Choice {
                id: p.id.clone(),
                label: render::partner_line(p),
            })
            .collect();
        pick(choices, "Partner:", &partners, |p| &p.id)
    }

    fn partner_form(
        &self,
        current: Option<&HighSchoolPartner>,
    ) -> Result<Option<PartnerForm>, DomainError> {
        let field = |label: &str, value: fn(&HighSchoolPartner) -> &str| {
            text(label, current.map(value).unwrap_or_default())
        };
        let Some(name) = field("Name:", |p| &p.name)? else {
            return Ok(None);
        };
        let Some(school) = field("School:", |p| &p.school)? else {
            return Ok(None);
        };
        let Some(title) = field("Title:", |p| &p.title)? else {
            return Ok(None);
        };
        let Some(email) = field("Email:", |p| &p.email)? else {
            return Ok(None);
        };
        let Some(phone) = field("Phone:", |p| &p.phone)? else {
            return Ok(None);
        };
        let Some(role) = field("Role:", |p| &p.role)? else {
            return Ok(None);
        };
        Ok(Some(PartnerForm {
            name,
            school,
            title,
            email,
            phone,
            role,
        }))
    }

    fn add_partner(&self) -> Result<(), DomainError> {
        self.outreach.ensure_partner_capacity()?;
        if let Some(form) = self.partner_form(None)? {
            let partner = self.outreach.add_partner(form)?;
            notice(&format!("Added {}.", partner.name));
        }
        Ok(())
    }

    fn edit_partner(&self) -> Result<(), DomainError> {
        let Some(partner) = self.pick_partner()? else {
            return Ok(());
        };
        if let Some(form) = self.partner_form(Some(&partner))? {
            self.outreach.update_partner(&partner.id, form)?;
        }
        Ok(())
    }

    fn delete_partner(&self) -> Result<(), DomainError> {
        let Some(partner) = self.pick_partner()? else {
            return Ok(());
        };
        if confirm(&format!("Delete {}?", partner.name))? {
            self.outreach.delete_partner(&partner.id)?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // High school interactions
    // ─────────────────────────────────────────────────────────────────────────

    fn interactions_menu(&self) -> Result<(), DomainError> {
        let actions = [
            Action::List,
            Action::Add,
            Action::Edit,
            Action::Delete,
            Action::Back,
        ];
        loop {
            let result = match self.action("High school interactions:", &actions)? {
                Action::List => {
                    list(
                        &self.outreach.interactions_newest_first(),
                        "No interactions yet.",
                        render::interaction_block,
                    );
                    Ok(())
                }
                Action::Add => self.add_interaction(),
                Action::Edit => self.edit_interaction(),
                Action::Delete => self.delete_interaction(),
                _ => return Ok(()),
            };
            report(result)?;
        }
    }

    fn pick_interaction(&self) -> Result<Option<HighSchoolInteraction>, DomainError> {
        let interactions = self.outreach.interactions_newest_first();
        let choices = interactions
            .iter()
            .map(|i| Choice {
                id: i.id.clone(),
                label: format!(
                    "{} {}",
                    short_date(i.date),
                    i.types.join(", ")
                ),
            })
            .collect();
        pick(choices, "Interaction:", &interactions, |i| &i.id)
    }

    fn interaction_form(
        &self,
        current: Option<&HighSchoolInteraction>,
    ) -> Result<Option<InteractionForm>, DomainError> {
        let default_date = current.map(|i| i.date.to_string()).unwrap_or_default();
        let Some(date_input) = text("Date (YYYY-MM-DD):", &default_date)? else {
            return Ok(None);
        };
        let date = render::parse_optional_date(&date_input)?;

        let names: Vec<String> = self
            .store
            .high_school_partners()
            .into_iter()
            .map(|p| p.name)
            .collect();
        let partners = if names.is_empty() {
            Vec::new()
        } else {
            let Some(partners) = ask(MultiSelect::new("Partners involved:", names).prompt())?
            else {
                return Ok(None);
            };
            partners
        };

        let Some(other_participants) = text(
            "Other participants:",
            current.map(|i| i.other_participants.as_str()).unwrap_or_default(),
        )?
        else {
            return Ok(None);
        };
        let Some(types) = ask(
            MultiSelect::new(
                "Interaction types:",
                self.outreach.interaction_types().to_vec(),
            )
            .prompt(),
        )?
        else {
            return Ok(None);
        };
        let Some(description) = text(
            "Description:",
            current.map(|i| i.description.as_str()).unwrap_or_default(),
        )?
        else {
            return Ok(None);
        };

        let mut artifacts = current.map(|i| i.artifacts.clone()).unwrap_or_default();
        if !artifacts.is_empty() {
            println!("Current artifacts: {}", artifacts.join(", "));
        }
        let Some(added) = text("Add artifact file names (comma-separated):", "")? else {
            return Ok(None);
        };
        let added = render::split_list(&added);
        self.outreach
            .ensure_artifact_capacity(artifacts.len(), added.len())?;
        artifacts.extend(added);

        Ok(Some(InteractionForm {
            date,
            partners,
            other_participants,
            types,
            description,
            artifacts,
        }))
    }

    fn add_interaction(&self) -> Result<(), DomainError> {
        self.outreach.ensure_interaction_capacity()?;
        if let Some(form) = self.interaction_form(None)? {
            self.outreach.add_interaction(form)?;
            notice("Interaction recorded.");
        }
        Ok(())
    }

    fn edit_interaction(&self) -> Result<(), DomainError> {
        let Some(interaction) = self.pick_interaction()? else {
            return Ok(());
        };
        if let Some(form) = self.interaction_form(Some(&interaction))? {
            self.outreach.update_interaction(&interaction.id, form)?;
        }
        Ok(())
    }

    fn delete_interaction(&self) -> Result<(), DomainError> {
        let Some(interaction) = self.pick_interaction()? else {
            return Ok(());
        };
        if confirm("Delete this interaction?")? {
            self.outreach.delete_interaction(&interaction.id)?;
        }
        Ok(())
    }
}

impl Drop for TuiInputPort {
    fn drop(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.store.unsubscribe(id);
        }
    }
}

#[async_trait(?Send)]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            if self.summary_stale.replace(false) {
                self.print_summary();
            }
            let item = match ask(Select::new("Dashboard:", MainMenu::ALL.to_vec()).prompt()) {
                Ok(Some(MainMenu::Quit)) | Ok(None) | Err(DomainError::Cancelled) => {
                    return Ok(());
                }
                Ok(Some(item)) => item,
                Err(e) => return Err(e),
            };
            match self.dispatch(item).await {
                Ok(()) => {}
                Err(DomainError::Cancelled) => return Ok(()),
                Err(e) => alert(&e),
            }
        }
    }
}

/// Shows business-rule failures and keeps the menu open. Cancellation and UI failures propagate.
fn report(result: Result<(), DomainError>) -> Result<(), DomainError> {
    match result {
        Err(e @ (DomainError::Cancelled | DomainError::Ui(_))) => Err(e),
        Err(e) => {
            alert(&e);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

fn text(label: &str, default: &str) -> Result<Option<String>, DomainError> {
    let prompt = Text::new(label);
    let prompt = if default.is_empty() {
        prompt
    } else {
        prompt.with_default(default)
    };
    ask(prompt.prompt())
}

fn confirm(label: &str) -> Result<bool, DomainError> {
    Ok(ask(Confirm::new(label).with_default(false).prompt())?.unwrap_or(false))
}

fn list<T>(items: &[T], empty: &str, line: impl Fn(&T) -> String) {
    if items.is_empty() {
        println!("{empty}");
        return;
    }
    for item in items {
        println!("  {}", line(item));
    }
}

/// Select over `choices`, mapped back to the record with the chosen id.
fn pick<T: Clone>(
    choices: Vec<Choice>,
    label: &str,
    records: &[T],
    id: impl Fn(&T) -> &str,
) -> Result<Option<T>, DomainError> {
    if choices.is_empty() {
        println!("Nothing to choose from.");
        return Ok(None);
    }
    let Some(choice) = ask(Select::new(label, choices).prompt())? else {
        return Ok(None);
    };
    Ok(records.iter().find(|r| id(r) == choice.id).cloned())
}
