use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use doc_enrich::workflow::{AbstractColumns, ClassifyColumns, NewsColumns};
use doc_enrich::{logging, App, Config};

/// 문서 → 표 LLM 보강 파이프라인
#[derive(Parser)]
#[command(name = "doc_enrich", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 네이버 뉴스 수집 + 요약
    News {
        /// 검색어
        query: String,
        /// 수집 원본 저장 경로
        #[arg(long, default_value = "news_data.csv")]
        raw_output: PathBuf,
        /// 요약본 저장 경로
        #[arg(long, default_value = "news_data_final.csv")]
        output: PathBuf,
        /// 요약 길이 제한 (자)
        #[arg(long, default_value_t = 150)]
        max_len: usize,
    },
    /// 논문 연구주제 분류
    Classify {
        /// 입력 표 (xlsx 또는 csv)
        #[arg(long)]
        input: PathBuf,
        /// 출력 CSV
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = "논문명")]
        title_col: String,
        #[arg(long, default_value = "초록")]
        abstract_col: String,
        #[arg(long, default_value = "과제명(국문)")]
        project_col: String,
        #[arg(long, default_value = "연구주제태그")]
        tag_col: String,
    },
    /// DOI 기반 초록 수집
    Abstract {
        /// 입력 표 (xlsx 또는 csv)
        #[arg(long)]
        input: PathBuf,
        /// 출력 CSV
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = "DOI")]
        doi_col: String,
        #[arg(long, default_value = "초록")]
        abstract_col: String,
        #[arg(long, default_value = "논문명")]
        title_col: String,
    },
    /// 회의 안건 PDF 구조화
    Agenda {
        /// 안건 PDF 폴더
        #[arg(long, default_value = "agenda")]
        folder: PathBuf,
        /// 출력 CSV
        #[arg(long, default_value = "agenda_summary.csv")]
        output: PathBuf,
    },
    /// 연도별 × 주제별 건수 집계
    Report {
        /// 태그가 붙은 입력 표
        #[arg(long)]
        input: PathBuf,
        /// 출력 CSV
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = "기준년도")]
        year_col: String,
        #[arg(long, default_value = "연구주제태그")]
        tag_col: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let app = App::new(config);

    match cli.command {
        Command::News {
            query,
            raw_output,
            output,
            max_len,
        } => {
            app.run_news(&query, &raw_output, &output, &NewsColumns::default(), max_len)
                .await?
        }
        Command::Classify {
            input,
            output,
            title_col,
            abstract_col,
            project_col,
            tag_col,
        } => {
            let columns = ClassifyColumns {
                title: title_col,
                abstract_col,
                project: project_col,
                tag: tag_col,
            };
            app.run_classify(&input, &output, &columns).await?
        }
        Command::Abstract {
            input,
            output,
            doi_col,
            abstract_col,
            title_col,
        } => {
            let columns = AbstractColumns {
                doi: doi_col,
                abstract_col,
                title: title_col,
            };
            app.run_abstract(&input, &output, &columns).await?
        }
        Command::Agenda { folder, output } => app.run_agenda(&folder, &output).await?,
        Command::Report {
            input,
            output,
            year_col,
            tag_col,
        } => app.run_report(&input, &output, &year_col, &tag_col)?,
    }

    Ok(())
}
