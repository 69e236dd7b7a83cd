use crate::config::save::save_settings;
use crate::config::types::Config;
use crate::menu::handlers::{
    run_concatenator, run_grouper, run_renamer, run_segmenter, run_trimmer,
};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 影片批次處理工具箱 ===").cyan().bold());
    println!("{}", style("按 ESC 返回或離開").dim());

    let options = vec![
        "影片無損串接（concat）",
        "影片批次裁剪（去片頭片尾）",
        "影片定長分段",
        "MP4 分組歸檔",
        "MP4 批次重新命名",
        "設定",
        "離開",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_concatenator(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            run_trimmer(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(2) => {
            run_segmenter(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(3) => {
            run_grouper(term, shutdown_signal)?;
            Ok(true)
        }
        Some(4) => {
            run_renamer(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(5) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(6) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== 設定 ===").cyan().bold());
        println!("{}", style("按 ESC 返回").dim());

        let options = vec![
            format!("分段長度: {} 分鐘", config.settings.segment_minutes),
            format!("重新命名分隔字元: '{}'", config.settings.rename_delimiter),
            "返回主選單".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇要修改的設定")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => edit_segment_minutes(config)?,
            Some(1) => edit_rename_delimiter(config)?,
            Some(2) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn edit_segment_minutes(config: &mut Config) -> Result<()> {
    let minutes: u32 = Input::new()
        .with_prompt("每段長度（分鐘）")
        .default(config.settings.segment_minutes)
        .validate_with(|value: &u32| {
            if *value == 0 {
                Err("分段長度必須大於 0")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    if minutes != config.settings.segment_minutes {
        config.settings.segment_minutes = minutes;
        save_settings(&config.settings)?;
        println!("\n{} {} 分鐘", style("設定已儲存:").green(), minutes);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

fn edit_rename_delimiter(config: &mut Config) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("分隔字元（單一字元）")
        .default(config.settings.rename_delimiter.to_string())
        .validate_with(|value: &String| {
            if value.chars().count() == 1 {
                Ok(())
            } else {
                Err("請輸入單一字元")
            }
        })
        .interact_text()?;

    let Some(delimiter) = input.chars().next() else {
        return Ok(());
    };

    if delimiter != config.settings.rename_delimiter {
        config.settings.rename_delimiter = delimiter;
        save_settings(&config.settings)?;
        println!("\n{} '{}'", style("設定已儲存:").green(), delimiter);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
