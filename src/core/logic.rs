use crate::config::Config;
use crate::core::calculator::filter::{PaymentView, filter_by_period, filter_records};
use crate::core::calculator::period::{period_label, resolve_period};
use crate::core::calculator::summary::{
    client_payment_summary, moes_summary, summarize_hour_log, summarize_work_records,
};
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::candidate::Candidate;
use crate::models::hour_log_entry::HourLogEntry;
use crate::models::period::PeriodKind;
use crate::models::summary::{BillingSummary, ClientPaymentTotals, MoesSummary};
use crate::models::work_record::WorkRecord;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Read side: fetch from the store, filter, aggregate.
pub struct Core;

impl Core {
    /// owner id → display name (alias first)
    pub fn owner_names(candidates: &[Candidate]) -> HashMap<String, String> {
        candidates
            .iter()
            .map(|c| (c.id.clone(), c.display_name().to_string()))
            .collect()
    }

    /// Ids of the candidates assigned to `client_id`.
    pub fn client_owner_ids(candidates: &[Candidate], client_id: &str) -> HashSet<String> {
        candidates
            .iter()
            .filter(|c| c.client_id.as_deref() == Some(client_id))
            .map(|c| c.id.clone())
            .collect()
    }

    /// Hour-log entries in the period, all candidates or only one.
    pub fn entries_in_period<S: RecordStore>(
        store: &S,
        kind: PeriodKind,
        reference: NaiveDate,
        owners: Option<&HashSet<String>>,
    ) -> AppResult<Vec<HourLogEntry>> {
        let period = resolve_period(kind, reference);
        let all = store.hour_log_entries()?;
        Ok(filter_by_period(&all, owners, &period)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Work records of a client in the period, for one payment view.
    pub fn client_records<S: RecordStore>(
        store: &S,
        client_id: &str,
        kind: PeriodKind,
        reference: NaiveDate,
        view: PaymentView,
    ) -> AppResult<Vec<WorkRecord>> {
        let owners = Self::client_owner_ids(&store.candidates()?, client_id);
        let period = resolve_period(kind, reference);
        let all = store.work_records()?;
        Ok(filter_records(&all, &owners, &period, view)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn hour_log_summary<S: RecordStore>(
        store: &S,
        cfg: &Config,
        kind: PeriodKind,
        reference: NaiveDate,
        candidate: Option<&str>,
    ) -> AppResult<BillingSummary> {
        let names = Self::owner_names(&store.candidates()?);
        let only: Option<HashSet<String>> = candidate.map(|c| HashSet::from([c.to_string()]));

        let entries = Self::entries_in_period(store, kind, reference, only.as_ref())?;
        let refs: Vec<&HourLogEntry> = entries.iter().collect();

        Ok(summarize_hour_log(
            &refs,
            &names,
            period_label(kind, reference),
            cfg.per_set_bonus_summary,
        ))
    }

    pub fn work_record_summary<S: RecordStore>(
        store: &S,
        cfg: &Config,
        client_id: &str,
        kind: PeriodKind,
        reference: NaiveDate,
        view: PaymentView,
    ) -> AppResult<BillingSummary> {
        let names = Self::owner_names(&store.candidates()?);
        let records = Self::client_records(store, client_id, kind, reference, view)?;
        let refs: Vec<&WorkRecord> = records.iter().collect();

        Ok(summarize_work_records(
            &refs,
            &names,
            period_label(kind, reference),
            cfg.work_record_set_bonus,
        ))
    }

    pub fn client_payment<S: RecordStore>(
        store: &S,
        cfg: &Config,
        client_id: &str,
        kind: PeriodKind,
        reference: NaiveDate,
        view: PaymentView,
    ) -> AppResult<ClientPaymentTotals> {
        let records = Self::client_records(store, client_id, kind, reference, view)?;
        let refs: Vec<&WorkRecord> = records.iter().collect();
        Ok(client_payment_summary(&refs, cfg.work_record_set_bonus))
    }

    /// Moe's view over every employee's records in the period.
    pub fn moes<S: RecordStore>(
        store: &S,
        cfg: &Config,
        kind: PeriodKind,
        reference: NaiveDate,
    ) -> AppResult<MoesSummary> {
        let period = resolve_period(kind, reference);
        let all = store.work_records()?;
        let refs = filter_by_period(&all, None, &period);
        Ok(moes_summary(&refs, &cfg.earnings()))
    }
}
