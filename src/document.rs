//! Document assembly: preamble, entry blocks, single write.
//!
//! The whole model is rebuilt from the filesystem on every run and discarded
//! after the output file is written; re-running on an unchanged directory
//! produces byte-identical output.

use crate::error::PackError;
use crate::render::render_entry;
use crate::scan::{scan_entries, sort_entries};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default output filename, written into the base directory
pub const OUTPUT_FILENAME: &str = "blog.md";

/// Hand-authored document header: repo links, README note, and commentary.
/// Reproduced verbatim; not generated.
const PREAMBLE_LINES: &[&str] = &[
    ">下载练习册题面以及想要拉到本地跑代码可以去 [CPlus 仓库](https://github.com/ceilf6/CPlusPlus)",
    "或者终端输入命令",
    "```",
    "git clone https://github.com/ceilf6/CPlusPlus",
    "```",
    "> 如果翻不了墙也可以用国内平替 [CPlus 仓库（国内）](https://gitee.com/ceilf6/SHU_CPlus)",
    "# README",
    "> ⚠️ 由于时间紧迫，这是我在回校后一周内同时复习多门课程、抽空完成的，如有不合理之处，欢迎随时交流，或直接在仓库提 Issue / PR。",
    "```",
    "## 🧠 关于算法的一些浅见（快速入门向）",
    "",
    "算法是基于计算机思想对数据进行管理和高效操作的艺术。它往往源于我们对问题结构的观察和抽象：",
    "",
    "- **分治思想** → 催生了归并排序、快速排序等；",
    "- **树形结构** → 发展出了深度优先搜索（DFS）、字典树、线段树等；",
    "- **懒更新** → 解决了高频动态区间修改的问题（如线段树懒标记）；",
    "- **重叠子问题** → 促成了动态规划，借助状态转移 + 递归回溯降低复杂度。",
    "",
    "💬 顺带一提：  ",
    "算法思想也广泛应用于其他领域。例如在前端开发中，理解\"树形结构\"的逻辑，可以：",
    "",
    "- 清晰描述 UI 组件的层级关系；",
    "- 在\"分叉节点\"复用公共组件；",
    "- 通过 `props` 注入差异化逻辑，实现**高度复用**和**低耦合工程**。",
    "",
    "---",
    "",
    "## 🤝 一起进步！",
    "",
    "欢迎各位大佬一起探讨与交流，互相学习，持续成长 🚀  ",
    "👉 有问题随时提 Issue，或者发起 PR～",
    "",
    "---",
    "",
    "> 在做完算法册题目后我发现本门课更加注重对 C++ 基础特性的把握以及工程化中的安全实践，对同学们后面工作有很大帮助",
    "```",
];

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct PackSummary {
    /// Number of entries rendered into the document
    pub entries: usize,
    /// Absolute or caller-relative path of the written file
    pub output_path: PathBuf,
}

/// Join preamble lines and rendered blocks into the final document text.
///
/// Single join, no incremental accumulation. With no entries the document is
/// the preamble alone.
pub fn assemble(blocks: &[String]) -> String {
    let mut parts: Vec<&str> = PREAMBLE_LINES.to_vec();
    parts.extend(blocks.iter().map(String::as_str));
    parts.join("\n")
}

/// Run the full pipeline: scan, sort, render, assemble, write.
///
/// The output file is written once, at the end; a structural failure anywhere
/// leaves no partial output.
pub fn generate(base: &Path, output_name: &str) -> Result<PackSummary, PackError> {
    info!("Scanning {} for exercise entries", base.display());

    let mut entries = scan_entries(base)?;
    sort_entries(&mut entries);
    debug!("Discovered {} entries", entries.len());

    let blocks = entries
        .iter()
        .map(render_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let document = assemble(&blocks);
    let output_path = base.join(output_name);
    std::fs::write(&output_path, &document).map_err(|source| PackError::WriteFailed {
        path: output_path.clone(),
        source,
    })?;

    info!(
        "Wrote {} ({} entries)",
        output_path.display(),
        entries.len()
    );

    Ok(PackSummary {
        entries: entries.len(),
        output_path,
    })
}
