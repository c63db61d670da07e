//! Builtin snippet set for the MES scripting API.
//!
//! These cover the scripting calls operators reach for most: resource
//! seizing and release, UR dashboard program loads, CNC runs, vision
//! inspection, assembly synchronization, and functional printing.

use crate::table::{SnippetLoadError, SnippetTable};

/// Snippet source shipped with the editor, parsed at session startup.
///
/// The `functionalPrinting()` trigger is spelled with parentheses; lookups
/// must use the verbatim spelling.
pub const BUILTIN_SOURCE: &str = concat!(
	"snippet resourceSeize\n",
	"\tresourceSeize('${1:resource_name}')\n",
	"snippet resourceSeizeAGV\n",
	"\tresourceSeize('${1:resource_name}', '${2:agv}')\n",
	"snippet resourceRelease\n",
	"\tresourceRelease('${1:resource_name}')\n",
	"snippet urDashboard\n",
	"\turDashboard('${1:robot_name}', '${2:urp_file_path}')\n",
	"snippet cncRun\n",
	"\tcncRun('${1:cnc_name}', '${2:cnc_file}')\n",
	"snippet visionInspection\n",
	"\tvisionInspection('${1:camera}', '${2:solution_id}', '${3:output_variable}')\n",
	"snippet readyForAssembly\n",
	"\treadyForAssembly('${1:primary_process}', '${2:secondary_process}', ${3:assembly_step})\n",
	"snippet readyForAssemblyInit\n",
	"\treadyForAssembly('${1:primary_process}', '${2:secondary_process}', 'initializeAssembly')\n",
	"snippet readyForAssemblyStart\n",
	"\treadyForAssembly('${1:primary_process}', '${2:secondary_process}', 'startAssembly')\n",
	"snippet readyForAssemblyFinish\n",
	"\treadyForAssembly('${1:primary_process}', '${2:secondary_process}', 'finishAssembly')\n",
	"snippet startupTasksComplete\n",
	"\tstartupTasksComplete()\n",
	"snippet functionalPrinting()\n",
	"\tfunctionalPrinting()\n",
	"snippet dynamicfunctionalPrinting\n",
	"\tdynamicfunctionalPrinting('${1:schematic_filename}')\n",
	"snippet dynamicMachining\n",
	"\tdynamicMachining('${1:CNC_program_number}')\n",
);

/// Loads the builtin table. A failure here means the embedded source is
/// broken and session startup must abort.
pub fn builtins() -> Result<SnippetTable, SnippetLoadError> {
	SnippetTable::load(BUILTIN_SOURCE)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::builtins;

	#[test]
	fn builtin_source_loads() {
		let table = builtins().expect("builtin snippet source should load");
		assert_eq!(table.len(), 14);
	}

	#[test]
	fn builtin_triggers_follow_source_order() {
		let table = builtins().unwrap();
		let triggers: Vec<&str> = table.triggers().collect();
		assert_eq!(
			triggers,
			vec![
				"resourceSeize",
				"resourceSeizeAGV",
				"resourceRelease",
				"urDashboard",
				"cncRun",
				"visionInspection",
				"readyForAssembly",
				"readyForAssemblyInit",
				"readyForAssemblyStart",
				"readyForAssemblyFinish",
				"startupTasksComplete",
				"functionalPrinting()",
				"dynamicfunctionalPrinting",
				"dynamicMachining",
			]
		);
	}

	#[test]
	fn expands_ur_dashboard_with_defaults() {
		let table = builtins().unwrap();
		assert_eq!(
			table.expand("urDashboard", &HashMap::new()).as_deref(),
			Some("urDashboard('robot_name', 'urp_file_path')")
		);
	}

	#[test]
	fn expands_vision_inspection_with_overrides() {
		let table = builtins().unwrap();
		let overrides = HashMap::from([(1, "camera2".to_string()), (3, "result".to_string())]);
		assert_eq!(
			table.expand("visionInspection", &overrides).as_deref(),
			Some("visionInspection('camera2', 'solution_id', 'result')")
		);
	}

	#[test]
	fn parenthesized_trigger_is_looked_up_verbatim() {
		let table = builtins().unwrap();
		assert!(table.get("functionalPrinting()").is_some());
		assert!(table.get("functionalPrinting").is_none());
	}
}
