// src/services/date_range.rs

//! Converte o seletor de período do dashboard numa janela concreta.
//!
//! `None` significa "sem filtro de data". Datas custom inválidas ou
//! incompletas também caem em `None` (fail-open): o dashboard nunca trava
//! por causa de input ruim.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::filters::{parse_calendar_date, DateFilter, DateRange, DateSelector};

pub fn resolve<Tz: TimeZone>(filter: &DateFilter, now: DateTime<Tz>) -> Option<DateRange> {
    let tz = now.timezone();
    let today = now.date_naive();
    let now_utc = now.with_timezone(&Utc);

    let range = match filter.selector {
        DateSelector::AllTime => return None,
        DateSelector::Today => DateRange {
            start: start_of_day(&tz, today)?,
            end: now_utc,
        },
        DateSelector::Last7Days => DateRange {
            start: start_of_day(&tz, today.checked_sub_days(Days::new(7))?)?,
            end: now_utc,
        },
        DateSelector::Last30Days => DateRange {
            start: start_of_day(&tz, today.checked_sub_days(Days::new(30))?)?,
            end: now_utc,
        },
        DateSelector::ThisMonth => DateRange {
            start: start_of_day(&tz, first_of_month(today)?)?,
            end: now_utc,
        },
        DateSelector::LastMonth => {
            // Último dia do mês anterior = véspera do dia 1 deste mês (janeiro vira dezembro)
            let last_day = first_of_month(today)?.pred_opt()?;
            DateRange {
                start: start_of_day(&tz, first_of_month(last_day)?)?,
                end: end_of_day(&tz, last_day)?,
            }
        }
        DateSelector::Custom => {
            let start = parse_calendar_date(filter.custom_start.as_deref());
            let end = parse_calendar_date(filter.custom_end.as_deref());
            let (Some(start), Some(end)) = (start, end) else {
                tracing::warn!(
                    start = ?filter.custom_start,
                    end = ?filter.custom_end,
                    "Período custom incompleto ou inválido, ignorando filtro de data"
                );
                return None;
            };
            DateRange {
                start: start_of_day(&tz, start)?,
                end: end_of_day(&tz, end)?,
            }
        }
    };

    if range.start > range.end {
        tracing::warn!(?range, "Período com início depois do fim, ignorando filtro de data");
        return None;
    }

    Some(range)
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

// 23:59:59.999999999 para a janela fechada incluir o último segundo inteiro
fn end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Utc>> {
    let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?;
    tz.from_local_datetime(&date.and_time(time))
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
}
