// Default prompt templates for the domain tag tree: sub-tag distillation and
// incremental revision against content changes.

use crate::prompts::Language;

pub const DISTILL_TAGS_KEY: &str = "DISTILL_TAGS_PROMPT";
pub const LABEL_REVISE_KEY: &str = "LABEL_REVISE_PROMPT";

/// Placeholders: {{parentTag}}, {{count}}, {{path}}, {{existingTagsText}}.
pub const DISTILL_TAGS_PROMPT: &str = r#"
你是一个专业的知识标签生成助手。我需要你帮我为主题"{{parentTag}}"生成{{count}}个子标签。

标签完整链路是：{{path}}

请遵循以下规则：
1. 生成的标签应该是"{{parentTag}}"领域内的专业子类别或子主题
2. 每个标签应该简洁、明确，通常为2-6个字
3. 标签之间应该有明显的区分，覆盖不同的方面
4. 标签应该是名词或名词短语，不要使用动词或形容词
5. 标签应该具有实用性，能够作为问题生成的基础
6. 标签应该有明显的序号，主题为 1 汽车，子标签应该为 1.1 汽车品牌，1.2 汽车型号，1.3 汽车价格等
7. 若主题没有序号，如汽车，说明当前在生成顶级标签，子标签应为 1 汽车品牌 2 汽车型号 3 汽车价格等

{{existingTagsText}}

请直接以JSON数组格式返回标签，不要有任何额外的解释或说明，格式如下：
["序号 标签1", "序号 标签2", "序号 标签3", ...]
"#;

/// Placeholders: {{parentTag}}, {{count}}, {{path}}, {{existingTagsText}}.
pub const DISTILL_TAGS_PROMPT_EN: &str = r#"
You are a professional knowledge tag generation assistant. I need you to generate {{count}} sub-tags for the parent tag "{{parentTag}}".

The full tag chain is: {{path}}

Please follow these rules:
1. Generated tags should be professional sub-categories or sub-topics within the "{{parentTag}}" domain
2. Each tag should be concise and clear, typically 2-6 characters
3. Tags should be clearly distinguishable, covering different aspects
4. Tags should be nouns or noun phrases; avoid verbs or adjectives
5. Tags should be practical and serve as a basis for question generation
6. Tags should have explicit numbering. If the parent tag is numbered (e.g., 1 Automobiles), sub-tags should be 1.1 Car Brands, 1.2 Car Models, 1.3 Car Prices, etc.
7. If the parent tag is unnumbered (e.g., "Automobiles"), indicating top-level tag generation, sub-tags should be 1 Car Brands 2 Car Models 3 Car Prices, etc.

{{existingTagsText}}

Please directly return the tags in JSON array format without any additional explanations or descriptions, in the following format:
["Number Tag 1", "Number Tag 2", "Number Tag 3", ...]
"#;

/// Placeholders: {{existingTags}}, {{text}}, {{deletedContent}}, {{newContent}}.
pub const LABEL_REVISE_PROMPT: &str = r#"
我需要你帮我修订一个已有的领域树结构，使其能够适应内容的变化。

## 之前的领域树结构
以下是之前完整的领域树结构（JSON格式）：
{{existingTags}}

## 之前完整文献的目录
以下是当前系统中所有文献的目录结构总览：
{{text}}

{{deletedContent}}

{{newContent}}

## 要求
请分析上述信息，修订现有的领域树结构，遵循以下原则：
1. 保持领域树的总体结构稳定，避免大规模重构
2. 对于删除的内容相关的领域标签：
   - 如果某个标签仅与删除的内容相关，且在现有文献中找不到相应内容支持，则移除该标签
   - 如果某个标签同时与其他保留的内容相关，则保留该标签
3. 对于新增的内容：
   - 如果新内容可以归类到现有的标签中，优先使用现有标签
   - 如果新内容引入了现有标签体系中没有的新领域或概念，再创建新的标签
4. 每个标签必须对应目录结构中的实际内容，不要创建没有对应内容支持的空标签
5. 确保修订后的领域树仍然符合良好的层次结构，标签间具有合理的父子关系

## 限制
1. 一级领域标签数量5-10个
2. 二级领域标签数量1-10个
3. 最多两层分类层级
4. 分类必须与原始目录内容相关
5. 输出必须符合指定 JSON 格式，不要输出 JSON 外其他任何不相关内容
6. 标签的名字最多不要超过 6 个字
7. 在每个标签前加入序号（序号不计入字数）

## 输出格式
最终输出修订后的完整领域树结构，使用下面的JSON格式：

```json
[
  {
    "label": "1 一级领域标签",
    "child": [
      {"label": "1.1 二级领域标签1"},
      {"label": "1.2 二级领域标签2"}
    ]
  },
  {
    "label": "2 一级领域标签(无子标签)"
  }
]
```

确保你的回答中只包含JSON格式的领域树，不要有其他解释性文字。"#;

/// Placeholders: {{existingTags}}, {{text}}, {{deletedContent}}, {{newContent}}.
pub const LABEL_REVISE_PROMPT_EN: &str = r#"
I need your help to revise an existing domain tree structure to adapt to content changes.

## Existing Domain Tree Structure
Here is the current domain tree structure (JSON format):
{{existingTags}}

{{deletedContent}}

{{newContent}}

## All Existing Literature TOC
Below is an overview of the table of contents from all current literature in the system:
{{text}}

Please analyze the above information and revise the existing domain tree structure according to the following principles:
1. Maintain the overall structure of the domain tree, avoiding large-scale reconstruction
2. For domain tags related to deleted content:
   - If a tag is only related to the deleted content and no supporting content can be found in the existing literature, remove the tag
   - If a tag is also related to other retained content, keep the tag
3. For newly added content:
   - If new content can be classified into existing tags, prioritize using existing tags
   - If new content introduces new domains or concepts not present in the existing tag system, create new tags
4. Each tag must correspond to actual content in the table of contents, do not create empty tags without corresponding content support
5. Ensure that the revised domain tree still has a good hierarchical structure with reasonable parent-child relationships between tags

## Constraints
1. The number of primary domain labels should be between 5 and 10.
2. The number of secondary domain labels ≤ 5 per primary label.
3. There should be at most two classification levels.
4. The classification must be relevant to the original catalog content.
5. The output must conform to the specified JSON format.
6. The names of the labels should not exceed 6 characters.
7. Do not output any content other than the JSON.
8. Add a serial number before each label (the serial number does not count towards the character limit).

Output the complete revised domain tree structure using the JSON format below:

```json
[
  {
    "label": "1 Primary Domain Label",
    "child": [
      {"label": "1.1 Secondary Domain Label 1"},
      {"label": "1.2 Secondary Domain Label 2"}
    ]
  },
  {
    "label": "2 Primary Domain Label (No Sub - labels)"
  }
]
```

Ensure that your answer only contains the domain tree in JSON format without any explanatory text."#;

pub fn distill_tags_template(language: Language) -> &'static str {
    match language {
        Language::Zh => DISTILL_TAGS_PROMPT,
        Language::En => DISTILL_TAGS_PROMPT_EN,
    }
}

pub fn label_revise_template(language: Language) -> &'static str {
    match language {
        Language::Zh => LABEL_REVISE_PROMPT,
        Language::En => LABEL_REVISE_PROMPT_EN,
    }
}
