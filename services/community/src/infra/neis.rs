//! Reqwest-backed adapter for the NEIS open school-information API.
//!
//! Owns transport and decoding only. Every NEIS endpoint answers with
//! `{"<endpoint>": [{"head": [..]}, {"row": [..]}]}`, or with a bare
//! `{"RESULT": {"CODE": .., "MESSAGE": ..}}` when there is nothing to return.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::repository::SchoolDirectoryPort;
use crate::domain::types::{
    DepartmentEntry, Meal, ScheduleEvent, SchoolDetail, SchoolSummary, normalize_dishes,
};
use crate::error::CommunityError;

const SCHOOL_INFO: &str = "schoolInfo";
const SCHOOL_MAJOR_INFO: &str = "schoolMajorinfo";
const MEAL_SERVICE: &str = "mealServiceDietInfo";
const SCHOOL_SCHEDULE: &str = "SchoolSchedule";

const PAGE_SIZE: &str = "100";

#[derive(Clone)]
pub struct NeisClient {
    client: Client,
    base_url: String,
    api_key: String,
    school_kind: String,
}

impl NeisClient {
    /// `base_url` is the hub root, e.g. `https://open.neis.go.kr/hub`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        school_kind: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            school_kind: school_kind.into(),
        })
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, CommunityError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("KEY", self.api_key.as_str()),
            ("Type", "json"),
            ("pIndex", "1"),
            ("pSize", PAGE_SIZE),
        ];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| CommunityError::Directory(format!("{endpoint} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CommunityError::Directory(format!(
                "{endpoint} answered HTTP {}",
                status.as_u16()
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            CommunityError::Directory(format!("{endpoint} returned an undecodable body: {e}"))
        })?;
        let rows = decode_rows(endpoint, &body)?;
        tracing::debug!(endpoint, rows = rows.len(), "neis response");
        Ok(rows)
    }
}

impl SchoolDirectoryPort for NeisClient {
    async fn search_schools(&self, name: &str) -> Result<Vec<SchoolSummary>, CommunityError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<SchoolInfoRow> = self
            .fetch_rows(
                SCHOOL_INFO,
                &[("SCHUL_NM", name), ("SCHUL_KND_SC_NM", self.school_kind.as_str())],
            )
            .await?;
        Ok(rows.into_iter().map(SchoolInfoRow::into_summary).collect())
    }

    async fn school_detail(
        &self,
        office_code: &str,
        school_code: &str,
    ) -> Result<Option<SchoolDetail>, CommunityError> {
        if office_code.is_empty() || school_code.is_empty() {
            return Ok(None);
        }
        let rows: Vec<SchoolInfoRow> = self
            .fetch_rows(
                SCHOOL_INFO,
                &[
                    ("ATPT_OFCDC_SC_CODE", office_code),
                    ("SD_SCHUL_CODE", school_code),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(SchoolInfoRow::into_detail))
    }

    async fn departments(
        &self,
        office_code: &str,
        school_code: &str,
    ) -> Result<Vec<DepartmentEntry>, CommunityError> {
        if office_code.is_empty() || school_code.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<MajorRow> = self
            .fetch_rows(
                SCHOOL_MAJOR_INFO,
                &[
                    ("ATPT_OFCDC_SC_CODE", office_code),
                    ("SD_SCHUL_CODE", school_code),
                ],
            )
            .await?;
        Ok(rows.into_iter().filter_map(MajorRow::into_entry).collect())
    }

    async fn meals(
        &self,
        office_code: &str,
        school_code: &str,
        date: Option<&str>,
    ) -> Result<Vec<Meal>, CommunityError> {
        if office_code.is_empty() || school_code.is_empty() {
            return Ok(Vec::new());
        }
        let mut params = vec![
            ("ATPT_OFCDC_SC_CODE", office_code),
            ("SD_SCHUL_CODE", school_code),
        ];
        if let Some(date) = date {
            params.push(("MLSV_YMD", date));
        }
        let rows: Vec<MealRow> = self.fetch_rows(MEAL_SERVICE, &params).await?;
        Ok(rows.into_iter().map(MealRow::into_meal).collect())
    }

    async fn schedules(
        &self,
        office_code: &str,
        school_code: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<ScheduleEvent>, CommunityError> {
        if office_code.is_empty() || school_code.is_empty() {
            return Ok(Vec::new());
        }
        let mut params = vec![
            ("ATPT_OFCDC_SC_CODE", office_code),
            ("SD_SCHUL_CODE", school_code),
        ];
        if let Some(from) = from {
            params.push(("AA_FROM_YMD", from));
        }
        if let Some(to) = to {
            params.push(("AA_TO_YMD", to));
        }
        let rows: Vec<ScheduleRow> = self.fetch_rows(SCHOOL_SCHEDULE, &params).await?;
        Ok(rows.into_iter().map(ScheduleRow::into_event).collect())
    }
}

/// Pull `body[endpoint][1].row` out of a NEIS response and decode each element.
///
/// A missing endpoint key, section or `row` array is an empty result. A bare
/// `RESULT` with an `ERROR-*` code is an upstream failure.
fn decode_rows<T: DeserializeOwned>(
    endpoint: &str,
    body: &Value,
) -> Result<Vec<T>, CommunityError> {
    if let Some(rows) = body
        .get(endpoint)
        .and_then(|sections| sections.get(1))
        .and_then(|section| section.get("row"))
        .and_then(Value::as_array)
    {
        return rows
            .iter()
            .map(|row| {
                T::deserialize(row).map_err(|e| {
                    CommunityError::Directory(format!("{endpoint} returned a malformed row: {e}"))
                })
            })
            .collect();
    }

    if let Some(code) = body.pointer("/RESULT/CODE").and_then(Value::as_str) {
        if code.starts_with("ERROR") {
            let message = body
                .pointer("/RESULT/MESSAGE")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(CommunityError::Directory(format!(
                "{endpoint} reported {code}: {message}"
            )));
        }
    }
    Ok(Vec::new())
}

// ── Row DTOs ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct SchoolInfoRow {
    sd_schul_code: Option<String>,
    schul_nm: Option<String>,
    atpt_ofcdc_sc_code: Option<String>,
    atpt_ofcdc_sc_nm: Option<String>,
    eng_schul_nm: Option<String>,
    schul_knd_sc_nm: Option<String>,
    org_rdnma: Option<String>,
    org_rdnzc: Option<String>,
    org_telno: Option<String>,
    hmpg_adres: Option<String>,
    fond_ymd: Option<String>,
    foas_memrd: Option<String>,
}

impl SchoolInfoRow {
    fn into_summary(self) -> SchoolSummary {
        SchoolSummary {
            school_code: self.sd_schul_code.unwrap_or_default(),
            school_name: self.schul_nm.unwrap_or_default(),
            office_code: self.atpt_ofcdc_sc_code.unwrap_or_default(),
            office_name: self.atpt_ofcdc_sc_nm.unwrap_or_default(),
            school_type: self.schul_knd_sc_nm.unwrap_or_default(),
            address: self.org_rdnma.unwrap_or_default(),
            found_date: self.fond_ymd.unwrap_or_default(),
            zip_code: self.org_rdnzc.unwrap_or_default(),
        }
    }

    fn into_detail(self) -> SchoolDetail {
        SchoolDetail {
            school_code: self.sd_schul_code.unwrap_or_default(),
            school_name: self.schul_nm.unwrap_or_default(),
            office_code: self.atpt_ofcdc_sc_code.unwrap_or_default(),
            office_name: self.atpt_ofcdc_sc_nm.unwrap_or_default(),
            english_name: self.eng_schul_nm.unwrap_or_default(),
            school_type: self.schul_knd_sc_nm.unwrap_or_default(),
            address: self.org_rdnma.unwrap_or_default(),
            zip_code: self.org_rdnzc.unwrap_or_default(),
            phone: self.org_telno.unwrap_or_default(),
            website: self.hmpg_adres.unwrap_or_default(),
            found_date: self.fond_ymd.unwrap_or_default(),
            anniversary: self.foas_memrd.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct MajorRow {
    dddep_nm: Option<String>,
    ord_sc_nm: Option<String>,
}

impl MajorRow {
    fn into_entry(self) -> Option<DepartmentEntry> {
        let name = [self.dddep_nm, self.ord_sc_nm]
            .into_iter()
            .flatten()
            .map(|name| name.trim().to_owned())
            .find(|name| !name.is_empty())?;
        Some(DepartmentEntry { name })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct MealRow {
    mlsv_ymd: Option<String>,
    mmeal_sc_nm: Option<String>,
    ddish_nm: Option<String>,
    cal_info: Option<String>,
}

impl MealRow {
    fn into_meal(self) -> Meal {
        Meal {
            date: self.mlsv_ymd.unwrap_or_default(),
            meal_type: self.mmeal_sc_nm.unwrap_or_default(),
            dishes: normalize_dishes(self.ddish_nm.as_deref().unwrap_or_default()),
            calories: self.cal_info.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct ScheduleRow {
    aa_ymd: Option<String>,
    event_nm: Option<String>,
    event_cntnt: Option<String>,
}

impl ScheduleRow {
    fn into_event(self) -> ScheduleEvent {
        ScheduleEvent {
            date: self.aa_ymd.unwrap_or_default(),
            event_name: self.event_nm.unwrap_or_default(),
            event_description: self.event_cntnt.unwrap_or_default(),
        }
    }
}
