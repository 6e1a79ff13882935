//! 외부 mecab (mecab-ko-dic) 프로세스 백엔드

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::TaggerError;

use super::{Morpheme, MorphologicalTagger, PosTag};

/// mecab 실행 파일을 호출하는 분석기
///
/// 호출마다 프로세스를 새로 띄우므로 인스턴스를 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct MecabTagger {
    command: PathBuf,
    dicdir: Option<PathBuf>,
}

impl MecabTagger {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            dicdir: None,
        }
    }

    /// 사전 디렉토리 지정 (`mecab -d <dicdir>`)
    pub fn with_dicdir(mut self, dicdir: impl Into<PathBuf>) -> Self {
        self.dicdir = Some(dicdir.into());
        self
    }

    /// 실행 파일이 존재하고 실행되는지 확인 (시작 시 점검용)
    pub fn check(&self) -> Result<(), TaggerError> {
        let output = Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(TaggerError::Failed(format!(
                "{} --version: {}",
                self.command.display(),
                output.status
            )))
        }
    }
}

impl MorphologicalTagger for MecabTagger {
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>, TaggerError> {
        let mut cmd = Command::new(&self.command);
        if let Some(ref dicdir) = self.dicdir {
            cmd.arg("-d").arg(dicdir);
        }
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // mecab은 줄 단위로 분석하므로 줄바꿈을 공백으로 바꿔 한 줄로 보냄
            let line = text.replace(['\n', '\r'], " ");
            let written = stdin
                .write_all(line.as_bytes())
                .and_then(|()| stdin.write_all(b"\n"));
            if let Err(e) = written {
                drop(stdin);
                // 자식 프로세스를 정리한 뒤 에러 반환
                let _ = child.kill();
                let _ = child.wait();
                return Err(TaggerError::Io(e));
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(TaggerError::Failed(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| TaggerError::Parse(format!("UTF-8 아님: {}", e)))?;
        parse_mecab_output(&stdout)
    }
}

/// mecab 출력 파싱
///
/// ```text
/// 3\tSN,*,*,*,*,*,*,*
/// 개\tNNBC,*,F,개,*,*,*,*
/// EOS
/// ```
pub fn parse_mecab_output(output: &str) -> Result<Vec<Morpheme>, TaggerError> {
    let mut morphemes = Vec::new();
    for line in output.lines() {
        if line.is_empty() || line == "EOS" {
            continue;
        }
        let (surface, features) = line
            .split_once('\t')
            .ok_or_else(|| TaggerError::Parse(format!("탭 구분자 없음: {:?}", line)))?;
        let tag = features.split(',').next().unwrap_or("");
        morphemes.push(Morpheme::new(surface, PosTag::parse(tag)));
    }
    Ok(morphemes)
}
