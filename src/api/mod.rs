use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    AgeGroup, AssetBadge, AssetBreakdown, CalcError, CalcObserver, CalculatorResult,
    CategoryComparison, ComparisonStatus, DEFAULT_LIFE_EXPECTANCY, ExpenseProfile,
    HouseholdProfile, HousingPosition, HousingType, Lenient, ManWon, Policy, RentType,
    SAMPLE_SIZE, SafetyLevel, advisor_criteria, age_group, asset_badge, average_data_by_age,
    baseline_expenses, calculate_results, calculate_results_with, compare_expenses,
    comparison_status, format_man_won, format_plain_won, format_won, profile_update,
};

const BANNER: &str = "nestegg retirement budget API\n\n\
    GET|POST /api/calculate  full budget calculation\n\
    GET|POST /api/averages   age-band peer averages\n\
    GET|POST /api/advice     advisor matching criteria\n\
    GET|POST /api/peers      peer expense comparison\n\
    GET|POST /api/summary    condensed profile snapshot\n";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliHousingType {
    OwnedLiving,
    OwnedRenting,
    Jeonse,
    Monthly,
    None,
}

impl From<CliHousingType> for HousingType {
    fn from(value: CliHousingType) -> Self {
        match value {
            CliHousingType::OwnedLiving => HousingType::OwnedLiving,
            CliHousingType::OwnedRenting => HousingType::OwnedRenting,
            CliHousingType::Jeonse => HousingType::Jeonse,
            CliHousingType::Monthly => HousingType::Monthly,
            CliHousingType::None => HousingType::None,
        }
    }
}

impl From<HousingType> for CliHousingType {
    fn from(value: HousingType) -> Self {
        match value {
            HousingType::OwnedLiving => CliHousingType::OwnedLiving,
            HousingType::OwnedRenting => CliHousingType::OwnedRenting,
            HousingType::Jeonse => CliHousingType::Jeonse,
            HousingType::Monthly => CliHousingType::Monthly,
            HousingType::None => CliHousingType::None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRentType {
    Jeonse,
    Monthly,
    None,
}

impl From<CliRentType> for RentType {
    fn from(value: CliRentType) -> Self {
        match value {
            CliRentType::Jeonse => RentType::Jeonse,
            CliRentType::Monthly => RentType::Monthly,
            CliRentType::None => RentType::None,
        }
    }
}

impl From<RentType> for CliRentType {
    fn from(value: RentType) -> Self {
        match value {
            RentType::Jeonse => CliRentType::Jeonse,
            RentType::Monthly => CliRentType::Monthly,
            RentType::None => CliRentType::None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    #[serde(deserialize_with = "lenient_years")]
    age: Option<u32>,
    health: Option<String>,
    mode: Option<String>,
    housing_type: Option<String>,
    current_rent_type: Option<String>,

    financial_assets: Option<ManWon>,
    severance_pay: Option<ManWon>,
    home_value: Option<ManWon>,
    home_mortgage: Option<ManWon>,
    jeonse_deposit: Option<ManWon>,
    monthly_deposit: Option<ManWon>,
    monthly_rent: Option<ManWon>,
    investment_real_estate: Option<ManWon>,
    investment_loan: Option<ManWon>,
    current_deposit: Option<ManWon>,
    current_rent: Option<ManWon>,
    owned_house_deposit: Option<ManWon>,
    debt: Option<ManWon>,
    inheritance: Option<ManWon>,

    national_pension: Option<ManWon>,
    private_pension: Option<ManWon>,
    housing_pension: Option<ManWon>,
    rental_income: Option<ManWon>,
    work_income: Option<ManWon>,
    financial_income: Option<ManWon>,
    other_income: Option<ManWon>,

    home_mortgage_interest: Option<ManWon>,
    investment_loan_interest: Option<ManWon>,
    debt_interest: Option<ManWon>,
    deposit_loan_interest: Option<ManWon>,
    deposit_loan: Option<ManWon>,

    #[serde(deserialize_with = "lenient_years")]
    life_expectancy: Option<u32>,
    enable_downsizing: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AveragesPayload {
    #[serde(deserialize_with = "lenient_years")]
    age: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PeersPayload {
    #[serde(deserialize_with = "lenient_years")]
    age: Option<u32>,
    #[serde(deserialize_with = "lenient_won")]
    total_assets: Option<f64>,

    food: Option<ManWon>,
    communication: Option<ManWon>,
    utilities: Option<ManWon>,
    living: Option<ManWon>,
    medical: Option<ManWon>,
    hobby: Option<ManWon>,
}

fn lenient_years<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Lenient>::deserialize(deserializer)?.map(|v| v.0 as u32))
}

fn lenient_won<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Lenient>::deserialize(deserializer)?.map(|v| v.0.max(0.0)))
}

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement budget calculator (housing normalization + linear depletion)"
)]
struct Cli {
    #[arg(long)]
    age: u32,
    #[arg(long, default_value = "")]
    health: String,
    #[arg(long, default_value = "", help = "Lifestyle label carried into the profile summary")]
    mode: String,
    #[arg(long, value_enum, default_value_t = CliHousingType::None)]
    housing_type: CliHousingType,
    #[arg(
        long,
        value_enum,
        default_value_t = CliRentType::None,
        help = "Rental arrangement while the owned home is rented out"
    )]
    current_rent_type: CliRentType,

    #[arg(long, default_value_t = ManWon::ZERO)]
    financial_assets: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    severance_pay: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    home_value: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    home_mortgage: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    jeonse_deposit: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    monthly_deposit: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    monthly_rent: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    investment_real_estate: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    investment_loan: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    current_deposit: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    current_rent: ManWon,
    #[arg(
        long,
        default_value_t = ManWon::ZERO,
        help = "Deposit owed back to the tenant of a rented-out owned home"
    )]
    owned_house_deposit: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    debt: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    inheritance: ManWon,

    #[arg(long, default_value_t = ManWon::ZERO)]
    national_pension: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    private_pension: ManWon,
    #[arg(
        long,
        default_value_t = ManWon::ZERO,
        help = "Monthly housing-pension payout; removes the home from the asset pool"
    )]
    housing_pension: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    rental_income: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    work_income: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    financial_income: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    other_income: ManWon,

    #[arg(long, default_value_t = ManWon::ZERO)]
    home_mortgage_interest: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    investment_loan_interest: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    debt_interest: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    deposit_loan_interest: ManWon,
    #[arg(long, default_value_t = ManWon::ZERO)]
    deposit_loan: ManWon,

    #[arg(long, default_value_t = DEFAULT_LIFE_EXPECTANCY, help = "Age to fund through")]
    life_expectancy: u32,
    #[arg(long, help = "Sell the primary residence and spend the discounted proceeds")]
    enable_downsizing: bool,
}

#[derive(Debug)]
struct CalcRequest {
    profile: HouseholdProfile,
    life_expectancy: u32,
    enable_downsizing: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PeersResponse {
    age_group: AgeGroup,
    asset_badge: AssetBadge,
    sample_size: u32,
    baseline: ExpenseProfile,
    comparisons: Vec<CategoryComparison>,
    household_total: ManWon,
    peer_total: ManWon,
    total_status: ComparisonStatus,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_request(cli: Cli) -> CalcRequest {
    let profile = HouseholdProfile {
        age: cli.age,
        health: cli.health,
        life_mode: cli.mode,
        housing_type: cli.housing_type.into(),
        current_rent_type: cli.current_rent_type.into(),

        financial_assets: cli.financial_assets,
        severance_pay: cli.severance_pay,
        home_value: cli.home_value,
        home_mortgage: cli.home_mortgage,
        jeonse_deposit: cli.jeonse_deposit,
        monthly_deposit: cli.monthly_deposit,
        monthly_rent: cli.monthly_rent,
        investment_real_estate: cli.investment_real_estate,
        investment_loan: cli.investment_loan,
        current_deposit: cli.current_deposit,
        current_rent: cli.current_rent,
        owned_house_deposit: cli.owned_house_deposit,
        debt: cli.debt,
        inheritance: cli.inheritance,

        national_pension: cli.national_pension,
        private_pension: cli.private_pension,
        housing_pension: cli.housing_pension,
        rental_income: cli.rental_income,
        work_income: cli.work_income,
        financial_income: cli.financial_income,
        other_income: cli.other_income,

        home_mortgage_interest: cli.home_mortgage_interest,
        investment_loan_interest: cli.investment_loan_interest,
        debt_interest: cli.debt_interest,
        deposit_loan_interest: cli.deposit_loan_interest,
        deposit_loan: cli.deposit_loan,
    };

    CalcRequest {
        profile,
        life_expectancy: cli.life_expectancy,
        enable_downsizing: cli.enable_downsizing,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/calculate", get(calculate_get_handler).post(calculate_post_handler))
        .route("/api/averages", get(averages_get_handler).post(averages_post_handler))
        .route("/api/advice", get(advice_get_handler).post(advice_post_handler))
        .route("/api/peers", get(peers_get_handler).post(peers_post_handler))
        .route("/api/summary", get(summary_get_handler).post(summary_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("nestegg HTTP API listening on http://{addr}");
    tracing::info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

pub fn run_calc(args: &[String]) -> Result<(), CalcError> {
    let mut argv = vec!["nestegg".to_string()];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    let request = build_request(cli);

    let result =
        calculate_results(&request.profile, request.life_expectancy, request.enable_downsizing)?;
    print_report(&request, &result);
    Ok(())
}

fn print_report(request: &CalcRequest, result: &CalculatorResult) {
    let breakdown = &result.asset_breakdown;
    let averages = average_data_by_age(request.profile.age);

    println!(
        "Retirement budget: age {} through {}, {} years",
        request.profile.age, request.life_expectancy, result.years_to_live
    );
    println!();
    println!("Assets");
    println!("  Net worth:       {}", format_won(breakdown.total_assets));
    println!("  Usable:          {}", format_won(breakdown.usable_assets));
    println!("  Unusable:        {}", format_won(breakdown.unusable_assets));
    println!("  Total debts:     {}", format_won(breakdown.total_debts));
    println!("  Emergency fund:  {}", format_won(breakdown.emergency_fund));
    println!("  Available:       {}", format_won(breakdown.available_assets));
    println!();
    println!("Withdrawal");
    println!("  Annual:          {}", format_plain_won(result.annual_amount));
    println!("  Monthly:         {}", format_plain_won(result.monthly_amount));
    println!("  Daily:           {}", format_plain_won(result.daily_amount));
    println!();
    println!("Monthly flows");
    println!("  Pension income:  {}", format_plain_won(result.monthly_pension));
    println!("  Other income:    {}", format_plain_won(result.monthly_other_income));
    println!("  Housing cost:    {}", format_plain_won(result.monthly_housing_cost));
    println!("  Loan interest:   {}", format_plain_won(result.monthly_loan_interest));
    println!();
    println!("Total available");
    println!("  Monthly:         {}", format_plain_won(result.total_monthly_available));
    println!("  Daily:           {}", format_plain_won(result.total_daily_available));
    println!("  Safety level:    {}", safety_label(result.safety_level));
    println!();
    println!("Age-band averages");
    println!("  Financial:       {}", format_man_won(averages.financial));
    println!("  Severance:       {}", format_man_won(averages.severance));
    println!("  Housing:         {}", format_man_won(averages.housing));
    println!("  Debt:            {}", format_man_won(averages.debt));
}

fn safety_label(level: SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Safe => "safe",
        SafetyLevel::Moderate => "moderate",
        SafetyLevel::Caution => "caution",
    }
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(BANNER)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculate_get_handler(Query(payload): Query<CalculatePayload>) -> Response {
    calculate_handler_impl(payload).await
}

async fn calculate_post_handler(Json(payload): Json<CalculatePayload>) -> Response {
    calculate_handler_impl(payload).await
}

async fn calculate_handler_impl(payload: CalculatePayload) -> Response {
    let request = calc_request_from_payload(payload);
    match run_request(&request) {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

async fn averages_get_handler(Query(payload): Query<AveragesPayload>) -> Response {
    averages_handler_impl(payload).await
}

async fn averages_post_handler(Json(payload): Json<AveragesPayload>) -> Response {
    averages_handler_impl(payload).await
}

async fn averages_handler_impl(payload: AveragesPayload) -> Response {
    json_response(StatusCode::OK, average_data_by_age(payload.age.unwrap_or(0)))
}

async fn advice_get_handler(Query(payload): Query<CalculatePayload>) -> Response {
    advice_handler_impl(payload).await
}

async fn advice_post_handler(Json(payload): Json<CalculatePayload>) -> Response {
    advice_handler_impl(payload).await
}

async fn advice_handler_impl(payload: CalculatePayload) -> Response {
    let request = calc_request_from_payload(payload);
    match run_request(&request) {
        Ok(result) => json_response(StatusCode::OK, advisor_criteria(&result)),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

async fn peers_get_handler(Query(payload): Query<PeersPayload>) -> Response {
    peers_handler_impl(payload).await
}

async fn peers_post_handler(Json(payload): Json<PeersPayload>) -> Response {
    peers_handler_impl(payload).await
}

async fn peers_handler_impl(payload: PeersPayload) -> Response {
    json_response(StatusCode::OK, build_peers_response(payload))
}

async fn summary_get_handler(Query(payload): Query<CalculatePayload>) -> Response {
    summary_handler_impl(payload).await
}

async fn summary_post_handler(Json(payload): Json<CalculatePayload>) -> Response {
    summary_handler_impl(payload).await
}

async fn summary_handler_impl(payload: CalculatePayload) -> Response {
    let request = calc_request_from_payload(payload);
    match run_request(&request) {
        Ok(result) => json_response(StatusCode::OK, profile_update(&request.profile, &result)),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn run_request(request: &CalcRequest) -> Result<CalculatorResult, CalcError> {
    calculate_results_with(
        &request.profile,
        request.life_expectancy,
        request.enable_downsizing,
        &Policy::default(),
        &TracingObserver,
    )
}

struct TracingObserver;

impl CalcObserver for TracingObserver {
    fn housing_evaluated(&self, position: &HousingPosition) {
        tracing::debug!(
            "housing position: asset {}, realized {}, monthly cost {}",
            position.asset,
            position.realized_asset,
            position.monthly_cost
        );
    }

    fn breakdown_assembled(&self, breakdown: &AssetBreakdown) {
        tracing::debug!(
            "asset breakdown: total {}, usable {}, available {}",
            breakdown.total_assets,
            breakdown.usable_assets,
            breakdown.available_assets
        );
    }

    fn result_ready(&self, result: &CalculatorResult) {
        tracing::debug!(
            "result: monthly available {}, daily available {}, safety {}",
            result.total_monthly_available,
            result.total_daily_available,
            safety_label(result.safety_level)
        );
    }
}

fn build_peers_response(payload: PeersPayload) -> PeersResponse {
    let group = age_group(payload.age.unwrap_or(0));
    let badge = asset_badge(payload.total_assets.unwrap_or(0.0));
    let baseline = baseline_expenses(group, badge);
    let household = ExpenseProfile {
        food: payload.food.unwrap_or_default(),
        communication: payload.communication.unwrap_or_default(),
        utilities: payload.utilities.unwrap_or_default(),
        living: payload.living.unwrap_or_default(),
        medical: payload.medical.unwrap_or_default(),
        hobby: payload.hobby.unwrap_or_default(),
    };
    let comparisons = compare_expenses(&household, &baseline);
    let household_total = household.total();
    let peer_total = baseline.total();

    PeersResponse {
        age_group: group,
        asset_badge: badge,
        sample_size: SAMPLE_SIZE,
        baseline,
        comparisons,
        household_total,
        peer_total,
        total_status: comparison_status(household_total, peer_total),
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn calc_request_from_json(json: &str) -> Result<CalcRequest, String> {
    let payload = serde_json::from_str::<CalculatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(calc_request_from_payload(payload))
}

fn calc_request_from_payload(payload: CalculatePayload) -> CalcRequest {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.age {
        cli.age = v;
    }
    if let Some(v) = payload.health {
        cli.health = v;
    }
    if let Some(v) = payload.mode {
        cli.mode = v;
    }
    if let Some(v) = payload.housing_type {
        cli.housing_type = HousingType::from_token(&v).into();
    }
    if let Some(v) = payload.current_rent_type {
        cli.current_rent_type = RentType::from_token(&v).into();
    }

    if let Some(v) = payload.financial_assets {
        cli.financial_assets = v;
    }
    if let Some(v) = payload.severance_pay {
        cli.severance_pay = v;
    }
    if let Some(v) = payload.home_value {
        cli.home_value = v;
    }
    if let Some(v) = payload.home_mortgage {
        cli.home_mortgage = v;
    }
    if let Some(v) = payload.jeonse_deposit {
        cli.jeonse_deposit = v;
    }
    if let Some(v) = payload.monthly_deposit {
        cli.monthly_deposit = v;
    }
    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v;
    }
    if let Some(v) = payload.investment_real_estate {
        cli.investment_real_estate = v;
    }
    if let Some(v) = payload.investment_loan {
        cli.investment_loan = v;
    }
    if let Some(v) = payload.current_deposit {
        cli.current_deposit = v;
    }
    if let Some(v) = payload.current_rent {
        cli.current_rent = v;
    }
    if let Some(v) = payload.owned_house_deposit {
        cli.owned_house_deposit = v;
    }
    if let Some(v) = payload.debt {
        cli.debt = v;
    }
    if let Some(v) = payload.inheritance {
        cli.inheritance = v;
    }

    if let Some(v) = payload.national_pension {
        cli.national_pension = v;
    }
    if let Some(v) = payload.private_pension {
        cli.private_pension = v;
    }
    if let Some(v) = payload.housing_pension {
        cli.housing_pension = v;
    }
    if let Some(v) = payload.rental_income {
        cli.rental_income = v;
    }
    if let Some(v) = payload.work_income {
        cli.work_income = v;
    }
    if let Some(v) = payload.financial_income {
        cli.financial_income = v;
    }
    if let Some(v) = payload.other_income {
        cli.other_income = v;
    }

    if let Some(v) = payload.home_mortgage_interest {
        cli.home_mortgage_interest = v;
    }
    if let Some(v) = payload.investment_loan_interest {
        cli.investment_loan_interest = v;
    }
    if let Some(v) = payload.debt_interest {
        cli.debt_interest = v;
    }
    if let Some(v) = payload.deposit_loan_interest {
        cli.deposit_loan_interest = v;
    }
    if let Some(v) = payload.deposit_loan {
        cli.deposit_loan = v;
    }

    if let Some(v) = payload.life_expectancy {
        cli.life_expectancy = v;
    }
    if let Some(v) = payload.enable_downsizing {
        cli.enable_downsizing = v;
    }

    build_request(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        age: 0,
        health: String::new(),
        mode: String::new(),
        housing_type: CliHousingType::None,
        current_rent_type: CliRentType::None,
        financial_assets: ManWon::ZERO,
        severance_pay: ManWon::ZERO,
        home_value: ManWon::ZERO,
        home_mortgage: ManWon::ZERO,
        jeonse_deposit: ManWon::ZERO,
        monthly_deposit: ManWon::ZERO,
        monthly_rent: ManWon::ZERO,
        investment_real_estate: ManWon::ZERO,
        investment_loan: ManWon::ZERO,
        current_deposit: ManWon::ZERO,
        current_rent: ManWon::ZERO,
        owned_house_deposit: ManWon::ZERO,
        debt: ManWon::ZERO,
        inheritance: ManWon::ZERO,
        national_pension: ManWon::ZERO,
        private_pension: ManWon::ZERO,
        housing_pension: ManWon::ZERO,
        rental_income: ManWon::ZERO,
        work_income: ManWon::ZERO,
        financial_income: ManWon::ZERO,
        other_income: ManWon::ZERO,
        home_mortgage_interest: ManWon::ZERO,
        investment_loan_interest: ManWon::ZERO,
        debt_interest: ManWon::ZERO,
        deposit_loan_interest: ManWon::ZERO,
        deposit_loan: ManWon::ZERO,
        life_expectancy: DEFAULT_LIFE_EXPECTANCY,
        enable_downsizing: false,
    }
}
