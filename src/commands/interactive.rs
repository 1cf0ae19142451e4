//! # 交互模式
//!
//! 未给出子命令时逐项提问，组装成对应子命令的参数后执行。
//! 生成的图像总是用系统查看器打开。
//!
//! ## 依赖关系
//! - 使用 `console` 读取终端输入
//! - 转交给 `commands/plot/{bs,dos,both}.rs`

use super::plot::{both, bs, dos};
use crate::cli::plot::{BothArgs, BsArgs, DosArgs, EnergyArgs, RenderArgs};
use crate::error::{BsDosError, Result};
use crate::models::BandSelection;

use console::Term;
use std::path::PathBuf;

/// 问答来源
pub trait Prompter {
    /// 输出问题并读取一行回答（已去除首尾空白）
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// 基于终端的问答
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.term
            .write_str(question)
            .map_err(BsDosError::TerminalError)?;
        let answer = self.term.read_line().map_err(BsDosError::TerminalError)?;
        Ok(answer.trim().to_string())
    }
}

/// 绘图类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlotKind {
    Band,
    Dos,
    Both,
}

impl PlotKind {
    fn parse(answer: &str) -> Result<Self> {
        match answer.to_lowercase().as_str() {
            "bs" => Ok(PlotKind::Band),
            "dos" => Ok(PlotKind::Dos),
            "both" => Ok(PlotKind::Both),
            other => Err(BsDosError::InvalidArgument(format!(
                "Unknown plot type '{}', expected BS, DoS or Both",
                other
            ))),
        }
    }
}

/// 组装完成的请求
#[derive(Debug)]
enum Request {
    Band(BsArgs),
    Dos(DosArgs),
    Both(BothArgs),
}

/// 仅 `Y` / `y` 视为肯定
fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// 空回答视为未给出
fn optional(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn ask_bands(prompter: &mut impl Prompter) -> Result<Option<BandSelection>> {
    let answer = prompter.ask("Which bands do you want to print? (Leave blank for all) ")?;
    let selection: BandSelection = answer.parse()?;
    Ok(Some(selection))
}

fn ask_energy(prompter: &mut impl Prompter) -> Result<EnergyArgs> {
    let ev = is_yes(&prompter.ask("Print in eV? Y/N ")?);
    let fermi = is_yes(&prompter.ask("Absolute energy? Y/N ")?);
    Ok(EnergyArgs { ev, fermi })
}

/// 按原有提问顺序收集参数
fn collect_request(prompter: &mut impl Prompter) -> Result<Request> {
    let kind = PlotKind::parse(
        &prompter.ask("Plot band structure, density of states or both? BS/DoS/Both ")?,
    )?;

    let band_input = match kind {
        PlotKind::Band | PlotKind::Both => {
            Some(PathBuf::from(prompter.ask("Band structure filename? ")?))
        }
        PlotKind::Dos => None,
    };
    let dos_input = match kind {
        PlotKind::Dos | PlotKind::Both => {
            Some(PathBuf::from(prompter.ask("Density of states filename? ")?))
        }
        PlotKind::Band => None,
    };

    let render = RenderArgs {
        output: optional(prompter.ask("Desired destination filename? ")?).map(PathBuf::from),
        show: true,
        ..RenderArgs::default()
    };

    let bands = match kind {
        PlotKind::Band | PlotKind::Both => ask_bands(prompter)?,
        PlotKind::Dos => None,
    };
    let energy = ask_energy(prompter)?;

    let bs_title = match kind {
        PlotKind::Band | PlotKind::Both => optional(
            prompter.ask("Band structure title? (Leave blank for default title) ")?,
        ),
        PlotKind::Dos => None,
    };
    let dos_title = match kind {
        PlotKind::Dos | PlotKind::Both => optional(
            prompter.ask("Density of states title? (Leave blank for default title) ")?,
        ),
        PlotKind::Band => None,
    };

    let request = match (kind, band_input, dos_input) {
        (PlotKind::Band, Some(input), _) => Request::Band(BsArgs {
            input,
            bands,
            title: bs_title,
            energy,
            render,
        }),
        (PlotKind::Dos, _, Some(input)) => Request::Dos(DosArgs {
            input,
            title: dos_title,
            energy,
            render,
        }),
        (PlotKind::Both, Some(band_input), Some(dos_input)) => Request::Both(BothArgs {
            band_input,
            dos_input,
            bands,
            bs_title,
            dos_title,
            energy,
            render,
        }),
        _ => return Err(BsDosError::Other("Incomplete interactive input".to_string())),
    };

    Ok(request)
}

/// 执行交互模式
pub fn execute() -> Result<()> {
    let mut prompter = TermPrompter::new();
    match collect_request(&mut prompter)? {
        Request::Band(args) => bs::execute(args),
        Request::Dos(args) => dos::execute(args),
        Request::Both(args) => both::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| BsDosError::Other("script exhausted".to_string()))
        }
    }

    #[test]
    fn test_band_request() {
        let mut p = Scripted::new(&["bs", "MgO.BAND", "mgo", "2,5", "Y", "n", ""]);
        let request = collect_request(&mut p).unwrap();

        match request {
            Request::Band(args) => {
                assert_eq!(args.input, PathBuf::from("MgO.BAND"));
                assert_eq!(args.bands, Some(BandSelection::Range(2, 5)));
                assert!(args.energy.ev);
                assert!(!args.energy.fermi);
                assert_eq!(args.title, None);
                assert_eq!(args.render.output, Some(PathBuf::from("mgo")));
                assert!(args.render.show);
            }
            other => panic!("unexpected request {:?}", other),
        }
        assert_eq!(p.asked.len(), 7);
    }

    #[test]
    fn test_both_request_asks_everything() {
        let mut p = Scripted::new(&[
            "Both", "a.BAND", "a.DOSS", "", "", "N", "y", "BS title", "DoS title",
        ]);
        let request = collect_request(&mut p).unwrap();

        match request {
            Request::Both(args) => {
                assert_eq!(args.bands, Some(BandSelection::All));
                assert!(args.energy.fermi);
                assert_eq!(args.render.output, None);
                assert_eq!(args.bs_title.as_deref(), Some("BS title"));
                assert_eq!(args.dos_title.as_deref(), Some("DoS title"));
            }
            other => panic!("unexpected request {:?}", other),
        }
        assert_eq!(p.asked.len(), 9);
    }

    #[test]
    fn test_dos_request_skips_band_questions() {
        let mut p = Scripted::new(&["DOS", "a.DOSS", "out", "n", "n", ""]);
        assert!(matches!(collect_request(&mut p).unwrap(), Request::Dos(_)));
        assert!(!p.asked.iter().any(|q| q.contains("bands")));
    }

    #[test]
    fn test_unknown_kind_and_too_many_bands() {
        assert!(collect_request(&mut Scripted::new(&["plot"])).is_err());

        let mut p = Scripted::new(&["bs", "a.BAND", "o", "1,2,3"]);
        assert!(matches!(
            collect_request(&mut p),
            Err(BsDosError::TooManyBandArguments(_))
        ));
    }
}
