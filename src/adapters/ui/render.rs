//! Plain-text views of store data for the terminal.

use crate::domain::{
    DomainError, Goal, HighSchoolInteraction, HighSchoolPartner, Meeting, Member, Summary,
};
use crate::shared::text::{long_date, short_date, title_case, truncate_words};
use chrono::NaiveDate;
use std::fmt::Write;

/// Summary cards. `hours_label` is the volunteer-hours range label, empty when unbounded.
pub fn summary(department: &str, summary: &Summary, hours_label: &str) -> String {
    let mut out = format!("== {} ==\n", department);
    let _ = writeln!(
        out,
        "Board members: {} | Special session: {} | Priority tactics: {} | Meetings: {}",
        summary.member_count,
        summary.special_session_member_count,
        summary.goal_count,
        summary.meeting_count
    );
    let _ = write!(out, "Volunteer hours: {}", hours(summary.total_volunteer_hours));
    if !hours_label.is_empty() {
        let _ = write!(out, " ({})", hours_label);
    }
    out
}

/// Hours with at most one decimal place; whole numbers print without one.
pub fn hours(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn member_line(member: &Member) -> String {
    let mut line = format!("{} ({})", member.name, member.organization);
    if !member.title.is_empty() {
        let _ = write!(line, ", {}", member.title);
    }
    let _ = write!(
        line,
        " [{}, {}]",
        title_case(member.category.as_str()),
        title_case(member.status.as_str())
    );
    if member.profile_image.is_some() {
        line.push_str(" (photo)");
    }
    line
}

pub fn goal_line(goal: &Goal, word_limit: usize) -> String {
    let mut line = format!("{} {}", goal.year, truncate_words(&goal.name, word_limit));
    if goal.outdated {
        line.push_str(" (outdated)");
    }
    line
}

pub fn meeting_block(meeting: &Meeting, word_limit: usize) -> String {
    let mut out = format!(
        "{} | {} | {} h | {} attendees | {} volunteer h",
        long_date(meeting.date),
        meeting.meeting_type.label(),
        hours(meeting.duration),
        meeting.attendees.len(),
        hours(meeting.volunteer_hours())
    );
    if !meeting.attendees.is_empty() {
        let names: Vec<&str> = meeting.attendees.iter().map(|m| m.name.as_str()).collect();
        let _ = write!(out, "\n    Attendees: {}", names.join(", "));
    }
    for tactic in &meeting.tactics_discussed {
        let _ = write!(out, "\n    - {}", truncate_words(&tactic.name, word_limit));
        if !tactic.recommendations.is_empty() {
            let _ = write!(out, "\n      {}", tactic.recommendations);
        }
    }
    out
}

pub fn partner_line(partner: &HighSchoolPartner) -> String {
    let mut line = format!("{}, {} at {}", partner.name, partner.title, partner.school);
    if !partner.email.is_empty() {
        let _ = write!(line, " <{}>", partner.email);
    }
    line
}

pub fn interaction_block(interaction: &HighSchoolInteraction) -> String {
    let mut out = format!(
        "{} | {}",
        short_date(interaction.date),
        interaction.types.join(", ")
    );
    if !interaction.partners.is_empty() {
        let _ = write!(out, "\n    Partners: {}", interaction.partners.join(", "));
    }
    if !interaction.other_participants.is_empty() {
        let _ = write!(out, "\n    Also: {}", interaction.other_participants);
    }
    let _ = write!(out, "\n    {}", interaction.description);
    if !interaction.artifacts.is_empty() {
        let _ = write!(out, "\n    Artifacts: {}", interaction.artifacts.join(", "));
    }
    out
}

/// Parses `YYYY-MM-DD`. Blank input is an open bound.
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, DomainError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DomainError::Validation(format!("{input} is not a YYYY-MM-DD date")))
}

/// Splits a comma-separated list, dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
